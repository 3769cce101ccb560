use super::*;

fn named(n: &str) -> Serie {
    Serie {
        name: n.to_owned(),
        ..Serie::default()
    }
}

#[test]
fn chain_links_follow_insertion_order() {
    let chain = LayerChain::from_series(vec![named("a"), named("b"), named("c")]);
    assert_eq!(chain.len(), 3);
    assert_eq!(chain.head(), Some(LayerId(0)));
    assert_eq!(chain.get(LayerId(0)).unwrap().next(), Some(LayerId(1)));
    assert_eq!(chain.get(LayerId(1)).unwrap().next(), Some(LayerId(2)));
    assert_eq!(chain.get(LayerId(2)).unwrap().next(), None);

    let names: Vec<_> = chain
        .iter()
        .map(|l| l.serie().unwrap().name.clone())
        .collect();
    assert_eq!(names, ["a", "b", "c"]);
}

#[test]
fn walk_from_middle_reaches_the_tail_only() {
    let chain = LayerChain::from_series(vec![named("a"), named("b"), named("c")]);
    assert_eq!(chain.walk_from(LayerId(1)), vec![LayerId(1), LayerId(2)]);
    assert!(chain.walk_from(LayerId(9)).is_empty());
}

#[test]
fn walk_is_bounded_even_with_a_cycle() {
    let mut chain = LayerChain::from_series(vec![named("a"), named("b")]);
    chain.get_mut(LayerId(1)).unwrap().next = Some(LayerId(0));
    assert_eq!(chain.walk_from(LayerId(0)).len(), 2);
}

#[test]
fn empty_chain_has_no_head() {
    let chain = LayerChain::from_series(Vec::new());
    assert!(chain.is_empty());
    assert!(chain.head().is_none());
    assert!(chain.order().is_empty());
    assert!(!chain.any_animating());
}

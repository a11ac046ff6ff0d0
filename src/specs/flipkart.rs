// src/specs/flipkart.rs
//
// Flipkart search results. Class names are build hashes and rotate;
// older layouts stay listed after newer ones.

use super::{HeuristicSpec, Marker, SelectorSpec, SiteProfile};

const CONTAINERS: &[&str] = &[
    "_1AtVbE",
    "_2kHMtA",
    "_4ddWXP",
    "_1xHGtK _373qXS",
    "_13oc-S",
    "cPHDOP",
    "_1YokD2",
];

pub fn profile() -> SiteProfile {
    SiteProfile {
        name: s!("flipkart"),
        selectors: SelectorSpec {
            containers: CONTAINERS.iter().map(|c| Marker::new("div", c)).collect(),
            name: vec![
                Marker::new("div", "_4rR01T"),
                Marker::new("a", "s1Q9rs"),
                Marker::new("a", "IRpwTa"),
            ],
            price: vec![
                Marker::new("div", "_30jeq3 _1_WHN1"),
                Marker::new("div", "_30jeq3"),
            ],
            rating: Some(Marker::new("div", "_3LWZlK")),
        },
        heuristic: HeuristicSpec::default(),
    }
}

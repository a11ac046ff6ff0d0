// src/extract/selectors.rs
//
// Tier 2: known container/field markers from the site profile.

use scraper::{ElementRef, Html, Selector};

use super::Extractor;
use crate::{
    core::{html, sanitize::first_number_run},
    data::{ProductRecord, Tier},
    error::ScrapeError,
    specs::{Marker, SelectorSpec},
};

pub struct SelectorExtractor {
    containers: Vec<(String, Selector)>,
    name: Vec<Selector>,
    price: Vec<Selector>,
    rating: Option<Selector>,
}

fn compile(markers: &[Marker]) -> Result<Vec<Selector>, ScrapeError> {
    markers.iter().map(|m| html::selector(&m.css())).collect()
}

impl SelectorExtractor {
    pub fn new(spec: &SelectorSpec) -> Result<Self, ScrapeError> {
        let containers = spec
            .containers
            .iter()
            .map(|m| {
                let css = m.css();
                html::selector(&css).map(|sel| (css, sel))
            })
            .collect::<Result<_, _>>()?;

        Ok(Self {
            containers,
            name: compile(&spec.name)?,
            price: compile(&spec.price)?,
            rating: spec.rating.as_ref().map(|m| html::selector(&m.css())).transpose()?,
        })
    }

    /// Containers for the first marker that matches anything. Later markers
    /// are not consulted once one hits.
    fn containers<'a>(&self, doc: &'a Html) -> Vec<ElementRef<'a>> {
        for (css, sel) in &self.containers {
            let found: Vec<_> = doc.select(sel).collect();
            if !found.is_empty() {
                logd!("Selectors: {} container(s) via `{css}`", found.len());
                return found;
            }
        }
        Vec::new()
    }

    fn record(&self, container: ElementRef<'_>) -> Option<ProductRecord> {
        let name_el = html::first_of(container, &self.name)?;
        let price_el = html::first_of(container, &self.price)?;

        let name = html::text_of(name_el);
        let price = first_number_run(&html::text_of(price_el));
        let rating = self
            .rating
            .as_ref()
            .and_then(|sel| container.select(sel).next())
            .map(|el| html::text_of(el).trim().to_string());

        ProductRecord::new(name, price, rating)
    }
}

impl Extractor for SelectorExtractor {
    fn tier(&self) -> Tier {
        Tier::Selectors
    }

    fn attempt(&self, doc: &Html) -> Vec<ProductRecord> {
        self.containers(doc)
            .into_iter()
            .filter_map(|c| self.record(c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::flipkart;

    fn run(body: &str) -> Vec<ProductRecord> {
        let doc = Html::parse_document(&format!("<html><body>{body}</body></html>"));
        SelectorExtractor::new(&flipkart::profile().selectors).unwrap().attempt(&doc)
    }

    #[test]
    fn first_container_marker_with_all_fields() {
        let recs = run(r#"
            <div class="_1AtVbE">
              <div class="_4rR01T">  Shirt </div>
              <div class="_30jeq3 _1_WHN1">₹1,299 with discount</div>
              <div class="_3LWZlK"> 4.2 </div>
            </div>"#);
        assert_eq!(recs, vec![ProductRecord {
            name: s!("Shirt"),
            price: s!("1,299"),
            rating: s!("4.2"),
        }]);
    }

    #[test]
    fn alternates_and_missing_rating() {
        let recs = run(r#"
            <div class="_13oc-S">
              <a class="IRpwTa">Jeans</a>
              <div class="_30jeq3">₹899</div>
            </div>"#);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].name, "Jeans");
        assert_eq!(recs[0].price, "899");
        assert_eq!(recs[0].rating, "N/A");
    }

    #[test]
    fn price_without_digits_is_sentinel() {
        let recs = run(r#"
            <div class="_2kHMtA"><div class="_4rR01T">Sold</div><div class="_30jeq3">Out of stock</div></div>"#);
        assert_eq!(recs[0].price, "N/A");
    }

    #[test]
    fn first_matching_marker_wins_without_merging() {
        // `_2kHMtA` is listed before `cPHDOP`; the cPHDOP product must not show up.
        let recs = run(r#"
            <div class="cPHDOP"><div class="_4rR01T">Later</div><div class="_30jeq3">₹1</div></div>
            <div class="_2kHMtA"><div class="_4rR01T">Earlier</div><div class="_30jeq3">₹2</div></div>"#);
        let names: Vec<_> = recs.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Earlier"]);
    }

    #[test]
    fn containers_missing_name_or_price_are_skipped_and_no_dedup() {
        let recs = run(r#"
            <div class="_1AtVbE"><div class="_4rR01T">Only name</div></div>
            <div class="_1AtVbE"><div class="_30jeq3">₹5</div></div>
            <div class="_1AtVbE"><div class="_4rR01T">Twin</div><div class="_30jeq3">₹5</div></div>
            <div class="_1AtVbE"><div class="_4rR01T">Twin</div><div class="_30jeq3">₹6</div></div>"#);
        let prices: Vec<_> = recs.iter().map(|r| r.price.as_str()).collect();
        assert_eq!(prices, ["5", "6"]);
    }

    #[test]
    fn multi_class_container_needs_both_classes() {
        let recs = run(r#"
            <div class="_1xHGtK"><a class="s1Q9rs">Half</a><div class="_30jeq3">₹3</div></div>"#);
        assert!(recs.is_empty());
        let recs = run(r#"
            <div class="_1xHGtK _373qXS"><a class="s1Q9rs">Whole</a><div class="_30jeq3">₹3</div></div>"#);
        assert_eq!(recs[0].name, "Whole");
    }
}

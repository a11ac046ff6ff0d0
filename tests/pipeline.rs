// tests/pipeline.rs
//
// End-to-end runs of the tier chain against canned pages.
mod common;

use std::{cell::Cell, rc::Rc};

use common::{fixture, page, FakeSite, Recorder};
use scraper::Html;
use shop_scrape::{
    data::{ExtractionResult, ProductRecord, Tier},
    extract::Extractor,
    specs::SiteProfile,
    Pipeline,
};

const URL: &str = "https://shop.example/search?q=x";

fn rec(name: &str, price: &str, rating: &str) -> ProductRecord {
    ProductRecord { name: name.into(), price: price.into(), rating: rating.into() }
}

fn run(site: &FakeSite, url: &str) -> (ExtractionResult, Recorder) {
    let pipeline = Pipeline::new(&SiteProfile::default()).unwrap();
    let mut rec = Recorder::default();
    let res = pipeline.run(url, site, Some(&mut rec));
    (res, rec)
}

#[test]
fn scenario_a_structured_data_only() {
    let html = page(
        r#"<title>Phones</title><script type="application/ld+json">
        {"@type":"ItemList","itemListElement":[{"item":{"name":"Phone X","offers":{"price":"19999"}}}]}
        </script>"#,
        "",
    );
    let (res, progress) = run(&FakeSite::ok(html), URL);

    assert_eq!(res, ExtractionResult::Rows(vec![rec("Phone X", "19999", "N/A")]));
    assert_eq!(res.message(), "Scraping successful!");
    assert_eq!(progress.started, [Tier::StructuredData]);
    assert!(progress.finished);
}

#[test]
fn scenario_b_selector_tier() {
    let html = page(
        "<title>Shirts</title>",
        r#"<div class="_1AtVbE">
             <div class="_4rR01T">Shirt</div>
             <div class="_30jeq3 _1_WHN1">₹1,299 with discount</div>
             <div class="_3LWZlK">4.2</div>
           </div>"#,
    );
    let (res, progress) = run(&FakeSite::ok(html), URL);

    assert_eq!(res.records(), [rec("Shirt", "1,299", "4.2")]);
    assert_eq!(progress.started, [Tier::StructuredData, Tier::Selectors]);
}

#[test]
fn scenario_c_heuristic_tier() {
    let html = page(
        "<title>Shoes</title>",
        r#"<a href="/p/1"><img src="s.jpg" alt="Shoe A"><span>$49</span></a>"#,
    );
    let (res, progress) = run(&FakeSite::ok(html), URL);

    assert_eq!(res.records(), [rec("Shoe A", "49", "N/A")]);
    assert_eq!(progress.started, Tier::ALL);
}

#[test]
fn scenario_d_robot_title_blocks_before_any_tier() {
    // Plenty to extract, but the title wins.
    let html = page(
        "<title>Robot Check</title>",
        r#"<a><img alt="Shoe A"><span>$49</span></a>"#,
    );
    let (res, progress) = run(&FakeSite::ok(html), URL);

    assert!(res.records().is_empty());
    assert_eq!(
        res.message(),
        "Scraping failed. The website is blocking the request with a CAPTCHA. Try again later or from a different network."
    );
    assert!(progress.started.is_empty());
}

#[test]
fn captcha_title_any_case() {
    let (res, _) = run(&FakeSite::ok(page("<title>Verify: CAPTCHA</title>", "")), URL);
    assert!(res.message().contains("CAPTCHA"));
    assert!(!res.is_success());
}

#[test]
fn scenario_e_empty_url_never_fetches() {
    let site = FakeSite::ok(fixture("search_jsonld.html"));
    for url in ["", "   "] {
        let (res, progress) = run(&site, url);
        assert_eq!(res, ExtractionResult::Failure("Please enter a URL to start scraping.".into()));
        assert!(progress.started.is_empty());
    }
    assert_eq!(site.calls.get(), 0);
}

#[test]
fn transport_failure_stops_before_tiers() {
    let site = FakeSite::failing("404 Not Found");
    let (res, progress) = run(&site, URL);

    assert_eq!(res, ExtractionResult::Failure("Error fetching URL: 404 Not Found".into()));
    assert_eq!(site.calls.get(), 1);
    assert!(progress.started.is_empty());
    assert!(progress.finished);
}

#[test]
fn nothing_found_exhausts_all_tiers() {
    let html = page("<title>Empty</title>", "<p>No results.</p>");
    let (res, progress) = run(&FakeSite::ok(html), URL);

    assert_eq!(
        res.message(),
        "All scraping methods failed. The website's structure is too complex or it's actively blocking script access."
    );
    assert_eq!(progress.done, [(Tier::StructuredData, 0), (Tier::Selectors, 0), (Tier::Heuristic, 0)]);
}

#[test]
fn page_without_title_is_not_blocked() {
    let html = "<html><body><a><img alt=\"Mug\"><b>€12</b><i>3.9</i></a></body></html>";
    let (res, _) = run(&FakeSite::ok(html), URL);
    assert_eq!(res.records(), [rec("Mug", "12", "3.9")]);
}

#[test]
fn fixture_jsonld_short_circuits_selectors() {
    let (res, progress) = run(&FakeSite::ok(fixture("search_jsonld.html")), URL);

    assert_eq!(res.records(), [rec("Phone X", "19999", "N/A"), rec("Phone Y", "24999", "4.4")]);
    assert_eq!(progress.started, [Tier::StructuredData]);
}

#[test]
fn fixture_classes_short_circuits_heuristic() {
    let (res, progress) = run(&FakeSite::ok(fixture("search_classes.html")), URL);

    assert_eq!(
        res.records(),
        [rec("Shirt", "1,299", "4.2"), rec("Linen Shirt, Slim Fit", "2,049", "N/A")]
    );
    assert_eq!(progress.done, [(Tier::StructuredData, 0), (Tier::Selectors, 2)]);
}

#[test]
fn fixture_links_dedups_by_name() {
    let (res, _) = run(&FakeSite::ok(fixture("search_links.html")), URL);
    assert_eq!(res.records(), [rec("Shoe A", "49", "N/A"), rec("Shoe B", "1,099", "4.6")]);
}

#[test]
fn price_and_rating_never_blank() {
    for name in ["search_jsonld.html", "search_classes.html", "search_links.html"] {
        let (res, _) = run(&FakeSite::ok(fixture(name)), URL);
        assert!(res.is_success(), "{name}");
        for r in res.records() {
            assert!(!r.name.is_empty());
            assert!(!r.price.is_empty() && !r.rating.is_empty(), "{name}: {r:?}");
        }
    }
}

#[test]
fn custom_profile_drives_selector_tier() {
    let profile = SiteProfile::from_json_str(r#"{
        "name": "tiny",
        "selectors": {
            "containers": [{ "tag": "li", "class": "card" }],
            "name":       [{ "tag": "h3", "class": "title" }],
            "price":      [{ "tag": "span", "class": "cost" }],
            "rating":     { "tag": "span", "class": "stars" }
        }
    }"#).unwrap();
    let pipeline = Pipeline::new(&profile).unwrap();
    let html = page(
        "<title>Cards</title>",
        r#"<ul><li class="card"><h3 class="title">Desk</h3><span class="cost">€ 149</span><span class="stars">4.8</span></li></ul>"#,
    );

    let rows = pipeline.extract_html(&html, None).unwrap();
    assert_eq!(rows, [rec("Desk", "149", "4.8")]);
}

#[test]
fn bad_profile_pattern_fails_at_build() {
    let mut profile = SiteProfile::default();
    profile.heuristic.currency = "(".into();
    assert!(Pipeline::new(&profile).is_err());
}

/// Returns fixed rows and counts how often it was asked.
struct Canned {
    tier: Tier,
    rows: Vec<ProductRecord>,
    calls: Rc<Cell<usize>>,
}

impl Canned {
    fn boxed(tier: Tier, rows: Vec<ProductRecord>) -> (Box<dyn Extractor>, Rc<Cell<usize>>) {
        let calls = Rc::new(Cell::new(0));
        (Box::new(Canned { tier, rows, calls: calls.clone() }), calls)
    }
}

impl Extractor for Canned {
    fn tier(&self) -> Tier {
        self.tier
    }
    fn attempt(&self, _doc: &Html) -> Vec<ProductRecord> {
        self.calls.set(self.calls.get() + 1);
        self.rows.clone()
    }
}

#[test]
fn custom_chain_runs_in_given_order_and_stops_at_first_hit() {
    let (empty, empty_calls) = Canned::boxed(Tier::Heuristic, vec![]);
    let (hit, hit_calls) = Canned::boxed(Tier::StructuredData, vec![rec("Kept", "1", "N/A")]);
    let (late, late_calls) = Canned::boxed(Tier::Selectors, vec![rec("Never", "2", "N/A")]);
    let pipeline = Pipeline::with_extractors(vec![empty, hit, late]);

    let mut progress = Recorder::default();
    let rows = pipeline.extract_html(&page("<title>Any</title>", ""), Some(&mut progress)).unwrap();

    assert_eq!(rows, [rec("Kept", "1", "N/A")]);
    assert_eq!(progress.started, [Tier::Heuristic, Tier::StructuredData]);
    assert_eq!((empty_calls.get(), hit_calls.get(), late_calls.get()), (1, 1, 0));
}

#[test]
fn empty_chain_is_exhausted_but_still_checks_for_blocks() {
    let pipeline = Pipeline::with_extractors(vec![]);

    let err = pipeline.extract_html(&page("<title>Shop</title>", ""), None).unwrap_err();
    assert!(err.to_string().starts_with("All scraping methods failed."));

    let err = pipeline.extract_html(&page("<title>Robot Check</title>", ""), None).unwrap_err();
    assert!(err.to_string().contains("CAPTCHA"));
}

use proptest::prelude::*;

use bx::search::encode::{GOOGLE_SEARCH_BASE, encode_component, google_search_url};
use bx::search::synonyms::role_synonyms;
use bx::search::{SearchParams, XRaySearchEngine, all_boards};

/// Profile-shaped text: realistic titles, skills, and locations.
fn arb_field() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 .+#/-]{0,24}"
}

/// Parameters whose own text does not smuggle the W2 token in; the
/// invariant is about generated terms, not echoed input.
fn arb_params() -> impl Strategy<Value = SearchParams> {
    (
        arb_field(),
        prop::collection::vec(arb_field(), 0..6),
        arb_field(),
        prop::option::of("H1B|OPT|GC|TN|E3"),
        any::<bool>(),
    )
        .prop_map(|(title, skills, location, visa, remote_ok)| {
            SearchParams::new(title)
                .with_primary_skills(skills)
                .with_location(location)
                .with_visa_status(visa.unwrap_or_default())
                .with_remote_ok(remote_ok)
        })
        .prop_filter("input itself must not contain the w2 token", |p| {
            let mut haystack = format!("{} {} {}", p.job_title, p.location, p.visa_status);
            haystack.push_str(&p.primary_skills.join(" "));
            !haystack.to_lowercase().contains("w2")
        })
}

proptest! {
    // =========================================================================
    // No-W2 Invariant
    // =========================================================================

    #[test]
    fn no_generated_query_requires_w2(params in arb_params()) {
        let engine = XRaySearchEngine::new();
        for q in engine
            .generate_all_queries(&params)
            .iter()
            .chain(engine.generate_hotlist_queries(&params).iter())
        {
            prop_assert!(
                !q.query.to_lowercase().contains("\"w2\""),
                "W2 term in: {}",
                q.query
            );
        }
    }

    // =========================================================================
    // Determinism
    // =========================================================================

    #[test]
    fn equal_params_yield_identical_output(params in arb_params()) {
        let engine = XRaySearchEngine::new();
        let first = engine.generate_all_queries(&params);
        let second = engine.generate_all_queries(&params);
        prop_assert_eq!(first, second);

        let first = engine.generate_hotlist_queries(&params);
        let second = engine.generate_hotlist_queries(&params);
        prop_assert_eq!(first, second);
    }

    // =========================================================================
    // C2C Density
    // =========================================================================

    #[test]
    fn at_least_five_queries_carry_c2c_terms(params in arb_params()) {
        let queries = XRaySearchEngine::new().generate_all_queries(&params);
        let c2c_count = queries
            .iter()
            .filter(|q| {
                let lower = q.query.to_lowercase();
                lower.contains("c2c") || lower.contains("corp to corp")
            })
            .count();
        prop_assert!(c2c_count >= 5, "only {} C2C queries", c2c_count);
    }

    // =========================================================================
    // URL Well-Formedness
    // =========================================================================

    #[test]
    fn every_search_url_decodes_back_to_its_query(params in arb_params()) {
        let engine = XRaySearchEngine::new();
        for q in engine
            .generate_all_queries(&params)
            .iter()
            .chain(engine.generate_hotlist_queries(&params).iter())
        {
            prop_assert!(q.search_url.starts_with(GOOGLE_SEARCH_BASE));
            let encoded = &q.search_url[GOOGLE_SEARCH_BASE.len()..];
            let decoded = urlencoding::decode(&encoded.replace('+', "%20"))
                .expect("valid percent-encoding")
                .into_owned();
            prop_assert_eq!(&decoded, &q.query);
        }
    }

    #[test]
    fn encode_component_round_trips(raw in "\\PC*") {
        let encoded = encode_component(&raw);
        let decoded = urlencoding::decode(&encoded.replace('+', "%20"))
            .expect("valid percent-encoding")
            .into_owned();
        prop_assert_eq!(decoded, raw);
    }

    #[test]
    fn google_url_has_fixed_prefix(raw in "\\PC*") {
        prop_assert!(google_search_url(&raw).starts_with(GOOGLE_SEARCH_BASE));
    }

    // =========================================================================
    // Never Panics
    // =========================================================================

    #[test]
    fn engine_never_panics_on_arbitrary_text(
        title in "\\PC*",
        skill in "\\PC*",
        location in "\\PC*",
    ) {
        let params = SearchParams::new(title)
            .with_primary_skills(vec![skill])
            .with_location(location);
        let engine = XRaySearchEngine::new();
        let _ = engine.generate_all_queries(&params);
        let _ = engine.generate_hotlist_queries(&params);
    }

    #[test]
    fn synonym_lookup_never_panics(title in "\\PC*") {
        let synonyms = role_synonyms(&title);
        prop_assert!(!synonyms.is_empty());
    }

    #[test]
    fn board_links_never_panic(title in "\\PC*", location in "\\PC*") {
        let links = all_boards(&title, &location);
        prop_assert_eq!(links.len(), 8);
    }
}

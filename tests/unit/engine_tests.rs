//! Engine-level tests against the public API.

use std::collections::HashSet;

use bx::search::{QueryCategory, SearchParams, SearchPlatform, XRaySearchEngine};

fn engine() -> XRaySearchEngine {
    XRaySearchEngine::new()
}

#[test]
fn generate_all_queries_returns_results() {
    let params = SearchParams::new("Java Developer")
        .with_primary_skills(vec![
            "Java".into(),
            "Spring Boot".into(),
            "Microservices".into(),
            "AWS".into(),
        ])
        .with_location("Dallas, TX")
        .with_visa_status("H1B");
    let queries = engine().generate_all_queries(&params);

    assert!(queries.len() > 10);
    let platforms: HashSet<SearchPlatform> = queries.iter().map(|q| q.platform).collect();
    assert!(platforms.contains(&SearchPlatform::Linkedin));
    assert!(platforms.contains(&SearchPlatform::Dice));
    assert!(platforms.contains(&SearchPlatform::Indeed));
}

#[test]
fn queries_include_job_title() {
    let params = SearchParams::new("Data Engineer").with_primary_skills(vec![
        "Python".into(),
        "Spark".into(),
        "AWS".into(),
        "Snowflake".into(),
    ]);
    let queries = engine().generate_all_queries(&params);

    let with_title = queries
        .iter()
        .filter(|q| q.query.contains("Data Engineer"))
        .count();
    assert!(with_title > 5, "title appeared in only {with_title} queries");
}

#[test]
fn location_included_when_provided() {
    let params = SearchParams::new("React Developer")
        .with_primary_skills(vec!["React".into(), "TypeScript".into(), "Node.js".into()])
        .with_location("Chicago, IL");
    let queries = engine().generate_all_queries(&params);

    let with_location = queries.iter().filter(|q| q.query.contains("Chicago")).count();
    assert!(with_location >= 3);
}

#[test]
fn hotlist_queries_mention_hotlist() {
    let params = SearchParams::new("Python Developer").with_primary_skills(vec![
        "Python".into(),
        "Django".into(),
        "AWS".into(),
    ]);
    let hotlist = engine().generate_hotlist_queries(&params);

    assert!(!hotlist.is_empty());
    assert!(hotlist.iter().any(|q| q.query.to_lowercase().contains("hotlist")));
}

#[test]
fn role_synonyms_lookup() {
    let e = engine();
    let synonyms = e.get_role_synonyms("java developer");
    assert!(synonyms.len() > 1);
    assert!(synonyms.contains(&"java developer".to_string()));

    let unknown = e.get_role_synonyms("Quantum Computing Specialist");
    assert_eq!(unknown, vec!["Quantum Computing Specialist".to_string()]);
}

#[test]
fn queries_are_c2c_only_no_w2() {
    let params = SearchParams::new("Java Developer")
        .with_primary_skills(vec!["Java".into(), "Spring Boot".into(), "AWS".into()])
        .with_location("Dallas, TX");
    let e = engine();
    let queries = e.generate_all_queries(&params);
    let hotlist = e.generate_hotlist_queries(&params);

    for q in queries.iter().chain(hotlist.iter()) {
        assert!(
            !q.query.to_lowercase().contains("\"w2\""),
            "W2 found in query: {}",
            q.query
        );
    }

    let c2c_count = queries
        .iter()
        .filter(|q| {
            let lower = q.query.to_lowercase();
            lower.contains("c2c") || lower.contains("corp to corp")
        })
        .count();
    assert!(c2c_count >= 5, "only {c2c_count} C2C queries");
}

#[test]
fn all_queries_have_search_urls() {
    let params = SearchParams::new("DevOps Engineer")
        .with_primary_skills(vec![
            "AWS".into(),
            "Kubernetes".into(),
            "Terraform".into(),
            "Docker".into(),
        ])
        .with_location("Seattle, WA");
    let queries = engine().generate_all_queries(&params);

    for q in &queries {
        assert!(q.search_url.starts_with("https://www.google.com/search?q="));
        assert!(!q.description.is_empty());
    }
}

#[test]
fn empty_input_is_safe() {
    let params = SearchParams::default();
    let e = engine();
    let queries = e.generate_all_queries(&params);
    let hotlist = e.generate_hotlist_queries(&params);

    assert!(!queries.is_empty());
    assert_eq!(hotlist.len(), 2);
    for q in queries.iter().chain(hotlist.iter()) {
        // No dangling artifacts of omitted clauses.
        assert!(!q.query.contains("()"), "empty parens: {}", q.query);
        assert!(!q.query.contains("\"\""), "empty phrase: {}", q.query);
        assert!(!q.query.starts_with(' '));
        assert!(!q.query.ends_with(' '));
    }
}

#[test]
fn category_and_priority_grouping_is_stable() {
    let params = SearchParams::new("Java Developer")
        .with_primary_skills(vec!["Java".into(), "Spring Boot".into()])
        .with_visa_status("H1B");
    let queries = engine().generate_all_queries(&params);

    // Stable sort by priority must keep emission order within each tier.
    let mut job_search: Vec<(usize, u8)> = queries
        .iter()
        .enumerate()
        .filter(|(_, q)| q.category == QueryCategory::JobSearch)
        .map(|(i, q)| (i, q.priority))
        .collect();
    job_search.sort_by_key(|(_, priority)| *priority);
    let priority_one: Vec<usize> = job_search
        .iter()
        .filter(|(_, priority)| *priority == 1)
        .map(|(i, _)| *i)
        .collect();
    let mut sorted = priority_one.clone();
    sorted.sort_unstable();
    assert_eq!(priority_one, sorted, "tie-break lost emission order");
}

#[test]
fn deterministic_output_for_equal_params() {
    let params = SearchParams::new("Data Engineer")
        .with_primary_skills(vec!["Python".into(), "Spark".into(), "AWS".into()])
        .with_location("Austin, TX")
        .with_visa_status("H1B");
    let e = engine();
    assert_eq!(
        e.generate_all_queries(&params),
        e.generate_all_queries(&params.clone())
    );
}

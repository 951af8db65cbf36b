use regattacentral_api::{Query, RaceResultsQuery, ResultsPageQuery};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com/servlet").unwrap()
}

#[test]
fn results_page_query_sets_job_id() {
    let url = ResultsPageQuery::new(8392).add_to_url(&base_url());
    assert_eq!(url.query(), Some("job_id=8392"));
}

#[test]
fn results_page_query_with_job_id_overrides() {
    let url = ResultsPageQuery::new(1)
        .with_job_id(2327)
        .add_to_url(&base_url());
    assert_eq!(url.query(), Some("job_id=2327"));
}

#[test]
fn race_results_query_parameter_order() {
    let url = RaceResultsQuery::new(6144, "555").add_to_url(&base_url());
    assert_eq!(
        url.query(),
        Some("Method=getResults&job_id=6144&event_id=555")
    );
}

#[test]
fn race_results_query_encodes_event_id() {
    let url = RaceResultsQuery::default()
        .with_job_id(1)
        .with_event_id("a b&c")
        .add_to_url(&base_url());
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert!(pairs.contains(&("event_id".to_string(), "a b&c".to_string())));
}

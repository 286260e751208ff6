use std::sync::Arc;

use indoc::indoc;

use bulkclone::{
    config::{ExecutionMode, Scheme},
    dispatcher::Dispatcher,
    fixtures::config::run_configuration,
    input::parse_references,
    mocks::executor::MockExecutor,
    report,
};

use crate::fixtures::mixed_listing;

fn sorted(mut values: Vec<String>) -> Vec<String> {
    values.sort();
    values
}

fn executor_for(failing_urls: &[String]) -> MockExecutor {
    failing_urls
        .iter()
        .fold(MockExecutor::new(), |executor, url| executor.failing_on(url))
}

mod conservation {
    use super::*;

    async fn check(mode: ExecutionMode) {
        let listing = mixed_listing(40);
        let executor = Arc::new(executor_for(&listing.failing_urls));
        let config = run_configuration(mode, Scheme::Ssh, false);
        let dispatcher = Dispatcher::new(config, executor).unwrap();

        let results = dispatcher.run(listing.references.clone()).await;

        assert_eq!(results.total(), listing.references.len());
        assert_eq!(sorted(results.successes), sorted(listing.expected_successes));
        assert_eq!(sorted(results.failures), sorted(listing.expected_failures));
    }

    #[tokio::test]
    async fn sequential() {
        check(ExecutionMode::Sequential).await;
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent() {
        check(ExecutionMode::Concurrent).await;
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_aggregation_over_repeated_trials() {
    for _ in 0..20 {
        let listing = mixed_listing(60);
        let executor = Arc::new(
            executor_for(&listing.failing_urls).with_delay(std::time::Duration::from_millis(1)),
        );
        let dispatcher = Dispatcher::new(
            run_configuration(ExecutionMode::Concurrent, Scheme::Ssh, false),
            executor.clone(),
        )
        .unwrap();

        let results = dispatcher.run(listing.references.clone()).await;

        assert_eq!(results.successes.len() + results.failures.len(), 60);
        assert_eq!(sorted(results.successes), sorted(listing.expected_successes));
        assert_eq!(sorted(results.failures), sorted(listing.expected_failures));
        assert_eq!(executor.calls().len(), 60 - 60 / 5);
    }
}

#[tokio::test]
async fn dry_run_writes_nothing() {
    let config = run_configuration(ExecutionMode::Concurrent, Scheme::Https, true);
    let destination = config.destination.clone();
    let executor = Arc::new(MockExecutor::new());
    let references = parse_references(indoc! {"
        https://github.com/o/one
        git@github.com:o/two.git
        https://github.com/o/three.git
    "});

    let results = Dispatcher::new(config, executor.clone())
        .unwrap()
        .run(references)
        .await;

    assert_eq!(sorted(results.successes), vec!["o-one", "o-three", "o-two"]);
    assert!(results.failures.is_empty());
    assert!(executor.calls().is_empty());
    assert!(!destination.exists());
}

#[tokio::test]
async fn listing_to_report() {
    let listing = indoc! {"
        # team repositories
        https://github.com/octocat/hello-world.git

        notaurl
        git@github.com:octocat/spoon-knife.git
    "};
    let executor =
        Arc::new(MockExecutor::new().failing_on("git@github.com:octocat/spoon-knife.git"));
    let dispatcher = Dispatcher::new(
        run_configuration(ExecutionMode::Sequential, Scheme::Ssh, false),
        executor,
    )
    .unwrap();

    let results = dispatcher.run(parse_references(listing)).await;

    let expected = indoc! {"
        ================ Clone Summary ================
        Successful: 1
          - octocat-hello-world
        Failed: 2
          - notaurl
          - git@github.com:octocat/spoon-knife.git
        ===============================================
    "};
    assert_eq!(report::render(&results), expected);
    assert!(results.has_failures());
}

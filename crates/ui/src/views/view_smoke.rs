use std::time::Duration;

use services::ClassificationService;
use storage::{ArtifactBundle, InMemoryArtifactRepository};
use tutor_core::classifier::{LogisticRegression, MultiClass, Pca, TfidfVectorizer};
use tutor_core::model::COMPLETION_NOTE;

use super::test_harness::{ViewHarness, ViewKind, setup_view_harness};
use crate::vm::{NOT_LOADED_MESSAGE, QuizIntent};

fn submit(harness: &mut ViewHarness, raw: &str) {
    let dispatch = harness.assessment_handles.dispatch();
    harness
        .dom
        .in_runtime(|| dispatch.call(QuizIntent::Submit(raw.to_owned())));
    super::test_harness::drive_dom(&mut harness.dom);
}

async fn wait_for(harness: &mut ViewHarness, needle: &str) -> String {
    for _ in 0..10 {
        harness.drive_async().await;
        let html = harness.render();
        if html.contains(needle) {
            return html;
        }
    }
    harness.render()
}

async fn classifier() -> ClassificationService {
    let bundle = ArtifactBundle {
        vectorizer: TfidfVectorizer {
            vocabulary: [("hate".to_string(), 0)].into_iter().collect(),
            idf: vec![1.0],
            ngram_range: (1, 1),
            sublinear_tf: false,
            norm: None,
        },
        reducer: Pca {
            mean: vec![0.0],
            components: vec![vec![1.0]],
            explained_variance: Vec::new(),
            whiten: false,
        },
        classifier: LogisticRegression {
            classes: vec![0, 1, 2],
            coef: vec![vec![6.0], vec![0.0], vec![0.0]],
            intercept: vec![0.0, 0.0, 1.0],
            multi_class: MultiClass::Multinomial,
        },
    };
    let repo = InMemoryArtifactRepository::with_bundle(bundle);
    ClassificationService::load(&repo).await.expect("load")
}

#[tokio::test(flavor = "current_thread")]
async fn learning_view_smoke_lists_shapes() {
    let mut harness = setup_view_harness(ViewKind::Learning, Duration::ZERO, None);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Select a shape:"), "missing picker in {html}");
    for name in ["Circle", "Rectangle", "Square", "Triangle", "Cube", "Cuboid"] {
        assert!(html.contains(name), "missing {name} in {html}");
    }
    assert!(html.contains("Get Formula"), "missing button in {html}");
    assert!(!html.contains("Calculate Area"), "sheet shown too early in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn assessment_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(ViewKind::Assessment, Duration::ZERO, None);
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Question 1: What is the area of a rectangle"),
        "missing question in {html}"
    );
    assert!(html.contains("Submit Answer"), "missing submit in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn assessment_view_explains_wrong_answers() {
    let mut harness = setup_view_harness(ViewKind::Assessment, Duration::ZERO, None);
    harness.rebuild();
    submit(&mut harness, "700");
    let html = harness.render();
    assert!(html.contains("Wrong answer. The correct answer is 800."), "missing feedback in {html}");
    assert!(html.contains("Question 1:"), "level changed in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn assessment_view_advances_after_delay() {
    let mut harness = setup_view_harness(ViewKind::Assessment, Duration::ZERO, None);
    harness.rebuild();
    submit(&mut harness, "800");
    assert!(harness.render().contains("Congratulations, correct answer!"));

    let html = wait_for(&mut harness, "Question 2:").await;
    assert!(html.contains("Question 2: What is the area of a triangle"), "did not advance: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn assessment_view_completes_and_disables_input() {
    let mut harness = setup_view_harness(ViewKind::Assessment, Duration::ZERO, None);
    harness.rebuild();
    for (level, answer) in ["800", "25", "153.86", "36", "96"].into_iter().enumerate() {
        let next = format!("Question {}:", level + 2);
        submit(&mut harness, answer);
        // The banner is matched up to its apostrophe, which the renderer escapes.
        let needle = if level == 4 { "Congratulations! You".to_owned() } else { next };
        let html = wait_for(&mut harness, &needle).await;
        assert!(html.contains(&needle), "missing {needle} in {html}");
    }
    let html = harness.render();
    assert!(html.contains(COMPLETION_NOTE), "missing note in {html}");
    assert!(html.contains("disabled"), "input not disabled in {html}");
    assert!(html.contains("Restart Assessment"), "missing restart in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn classify_view_smoke_without_artifacts() {
    let mut harness = setup_view_harness(ViewKind::Classify, Duration::ZERO, None);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Enter your tweet:"), "missing label in {html}");
    assert!(html.contains(NOT_LOADED_MESSAGE), "missing warning in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn classify_view_smoke_with_artifacts() {
    let mut harness =
        setup_view_harness(ViewKind::Classify, Duration::ZERO, Some(classifier().await));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Classify"), "missing button in {html}");
    assert!(!html.contains(NOT_LOADED_MESSAGE), "unexpected warning in {html}");
}

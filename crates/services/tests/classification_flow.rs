use std::collections::HashMap;

use services::{
    AppServices, ArtifactLoadError, ClassificationService, ClassifyOutcome, EMPTY_INPUT_MESSAGE,
};
use storage::{ArtifactBundle, InMemoryArtifactRepository};
use tutor_core::classifier::{
    ClassLabel, LogisticRegression, MultiClass, Norm, Pca, TfidfVectorizer,
};

fn bundle() -> ArtifactBundle {
    ArtifactBundle {
        vectorizer: TfidfVectorizer {
            vocabulary: HashMap::from([
                ("hate".to_string(), 0),
                ("stupid".to_string(), 1),
                ("flower".to_string(), 2),
                ("peopl".to_string(), 3),
            ]),
            idf: vec![2.0, 1.5, 1.5, 1.0],
            ngram_range: (1, 1),
            sublinear_tf: false,
            norm: Some(Norm::L2),
        },
        reducer: Pca {
            mean: vec![0.1, 0.1, 0.1, 0.1],
            components: vec![
                vec![1.0, 0.0, 0.0, 0.5],
                vec![0.0, 1.0, 0.0, 0.0],
                vec![0.0, 0.0, 1.0, 0.0],
            ],
            explained_variance: Vec::new(),
            whiten: false,
        },
        classifier: LogisticRegression {
            classes: vec![0, 1, 2],
            coef: vec![
                vec![8.0, 0.0, 0.0],
                vec![0.0, 8.0, 0.0],
                vec![0.0, 0.0, 8.0],
            ],
            intercept: vec![0.0, 0.0, 0.0],
            multi_class: MultiClass::Multinomial,
        },
    }
}

async fn service() -> ClassificationService {
    let repo = InMemoryArtifactRepository::with_bundle(bundle());
    ClassificationService::load(&repo).await.expect("load")
}

fn predicted(outcome: ClassifyOutcome) -> tutor_core::classifier::Prediction {
    match outcome {
        ClassifyOutcome::Predicted(prediction) => prediction,
        other => panic!("expected a prediction, got {other:?}"),
    }
}

#[tokio::test]
async fn classifies_into_the_three_labels() {
    let service = service().await;

    let hate = predicted(service.classify("RT @x I hate people").unwrap());
    assert_eq!(hate.label, ClassLabel::HateSpeech);

    let offensive = predicted(service.classify("so STUPID!!!").unwrap());
    assert_eq!(offensive.label, ClassLabel::OffensiveLanguage);

    let neither = predicted(service.classify("look at the flowers").unwrap());
    assert_eq!(neither.label, ClassLabel::Neither);
    assert!((0.0..=100.0).contains(&neither.confidence));
}

#[tokio::test]
async fn blank_input_never_reaches_the_pipeline() {
    let service = service().await;
    for text in ["", "   ", "\n\t"] {
        let outcome = service.classify(text).unwrap();
        assert_eq!(outcome.message(), EMPTY_INPUT_MESSAGE);
        assert!(outcome.confidence_line().is_none());
    }
}

#[tokio::test]
async fn messages_follow_the_display_format() {
    let outcome = service().await.classify("I hate people").unwrap();
    assert_eq!(outcome.message(), "Prediction: Hate Speech");
    let line = outcome.confidence_line().unwrap();
    assert!(line.starts_with("Prediction Confidence: "));
    assert!(line.ends_with('%'));

    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["outcome"], "predicted");
    assert_eq!(json["label"], "Hate Speech");
}

#[tokio::test]
async fn inconsistent_artifacts_fail_at_load() {
    let mut broken = bundle();
    broken.reducer.mean.pop();
    let repo = InMemoryArtifactRepository::with_bundle(broken);
    let err = ClassificationService::load(&repo).await.unwrap_err();
    assert!(matches!(err, ArtifactLoadError::Pipeline(_)), "{err:?}");
}

#[tokio::test]
async fn missing_artifacts_fail_at_load() {
    let repo = InMemoryArtifactRepository::new();
    let err = AppServices::with_classifier(std::time::Duration::ZERO, &repo)
        .await
        .err()
        .expect("load should fail");
    assert!(matches!(err, ArtifactLoadError::Storage(_)));
}

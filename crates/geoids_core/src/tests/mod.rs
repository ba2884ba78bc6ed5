use std::{
    convert::Infallible,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use tower::{Service, ServiceExt, service_fn};

use crate::sanitization::{
    api::{CleanParams, RawParams, Sanitizer},
    error::SanitizationError,
    ids::IdsSanitizer,
    infrastructure::{
        naming::{CompositeId, join_ids},
        vocabulary::TypeVocabulary,
    },
    init_sanitizer,
};

/// Downstream stand-in returning the sanitized ids in raw form, counting calls.
fn lookup_service(
    calls: Arc<AtomicUsize>,
) -> impl Service<CleanParams, Response = String, Error = Infallible, Future: Send> + Clone {
    service_fn(move |clean: CleanParams| {
        calls.fetch_add(1, Ordering::SeqCst);
        async move { Ok::<_, Infallible>(join_ids(clean.ids.as_deref().unwrap_or_default())) }
    })
}

fn ids(raw: &str) -> RawParams {
    RawParams::new().with_param("ids", raw)
}

#[tokio::test]
async fn integration_pipeline_forwards_clean_ids() {
    #[cfg(feature = "geoids_tracing")]
    crate::geoids_tracing::init();
    let calls = Arc::new(AtomicUsize::new(0));
    let mut pipeline = init_sanitizer(TypeVocabulary::default(), lookup_service(calls.clone()));

    let response = ServiceExt::<RawParams>::ready(&mut pipeline)
        .await
        .unwrap()
        .call(ids("geoname:4163334,osmway:1,geoname:4163334"))
        .await
        .unwrap();

    assert_eq!(response, "geoname:4163334,osmway:1");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn integration_pipeline_rejects_without_calling_inner() {
    #[cfg(feature = "geoids_tracing")]
    crate::geoids_tracing::init();
    let calls = Arc::new(AtomicUsize::new(0));
    let pipeline = init_sanitizer(
        TypeVocabulary::new(["geoname", "osmnode"]),
        lookup_service(calls.clone()),
    );

    assert_eq!(
        pipeline
            .clone()
            .oneshot(ids("geoname:4163334,bogus:1"))
            .await
            .unwrap_err()
            .to_string(),
        "Sanitization error, invalid parameters: bogus is invalid. It must be one of these \
         values - [geoname, osmnode]"
    );

    assert_eq!(
        pipeline
            .clone()
            .oneshot(ids("geoname:1").with_param("ids", "geoname:2"))
            .await
            .unwrap_err()
            .to_string(),
        "Sanitization error, invalid parameters: `ids` parameter specified multiple times."
    );

    assert_eq!(
        pipeline.oneshot(RawParams::new()).await.unwrap_err().to_string(),
        "Sanitization error, invalid parameters: invalid param 'ids': text length, must be >0"
    );

    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn integration_pipeline_rejection_carries_diagnostics() {
    let calls = Arc::new(AtomicUsize::new(0));
    let pipeline = init_sanitizer(TypeVocabulary::default(), lookup_service(calls));

    let error = pipeline.oneshot(ids("geoname:1,,nodelim,osmnode:")).await.unwrap_err();
    let Some(SanitizationError::Rejected(diagnostics)) =
        error.downcast_ref::<SanitizationError>()
    else {
        panic!("Expected SanitizationError::Rejected");
    };
    assert_eq!(
        diagnostics.errors,
        vec![
            "invalid param 'ids': text length, must be >0",
            "invalid: must be of the format type:id for ex: 'geoname:4163334'",
            "invalid: must be of the format type:id for ex: 'geoname:4163334'",
            "invalid param 'osmnode:': text length, must be >0",
        ]
    );
    assert!(diagnostics.warnings.is_empty());
}

#[tokio::test]
async fn integration_pipeline_concurrent_requests() {
    let calls = Arc::new(AtomicUsize::new(0));
    let pipeline = init_sanitizer(TypeVocabulary::default(), lookup_service(calls.clone()));

    let tasks: Vec<_> = (0..16)
        .map(|n| {
            let pipeline = pipeline.clone();
            tokio::spawn(async move {
                let raw = if n % 2 == 0 { format!("geoname:{n}") } else { format!("bogus:{n}") };
                pipeline.oneshot(ids(&raw)).await.is_ok()
            })
        })
        .collect();

    let mut accepted = 0;
    for task in tasks {
        if task.await.unwrap() {
            accepted += 1;
        }
    }
    assert_eq!(accepted, 8);
    assert_eq!(calls.load(Ordering::SeqCst), 8);
}

#[test]
fn integration_sanitize_round_trip_is_idempotent() {
    let sanitizer = IdsSanitizer::default();
    let inputs = [
        "geoname:4163334",
        "osmnode:1,osmway:2,osmnode:1",
        "admin0:a:b,locality:x y,geoname:9",
        "openaddresses:us/ca:123,geoname:1 ",
    ];

    for input in inputs {
        let mut first = CleanParams::default();
        assert!(sanitizer.sanitize(&ids(input), &mut first).is_ok(), "input {input:?}");
        let first_ids = first.ids.clone().unwrap();

        let mut second = CleanParams::default();
        let diagnostics = sanitizer.sanitize(&ids(&join_ids(&first_ids)), &mut second);
        assert!(diagnostics.is_ok());
        assert_eq!(second, first, "input {input:?}");
    }
}

#[test]
fn integration_well_formed_lists() {
    let vocabulary = TypeVocabulary::default();
    let sanitizer = IdsSanitizer::new(vocabulary.clone());

    // Two ids per type, every list sent twice
    let pairs: Vec<(String, String)> = vocabulary
        .iter()
        .enumerate()
        .flat_map(|(i, kind)| {
            [(kind.to_string(), format!("{i}")), (kind.to_string(), format!("{}", 100 - i))]
        })
        .collect();
    let mut raw = pairs.iter().map(|(kind, id)| format!("{kind}:{id}")).collect::<Vec<_>>();
    raw.extend(raw.clone());

    let mut clean = CleanParams::default();
    let diagnostics = sanitizer.sanitize(&ids(&raw.join(",")), &mut clean);

    assert!(diagnostics.errors.is_empty());
    assert!(diagnostics.warnings.is_empty());
    assert_eq!(
        clean.ids.unwrap(),
        pairs
            .into_iter()
            .map(|(kind, id)| CompositeId { kind, id })
            .collect::<Vec<_>>()
    );
}

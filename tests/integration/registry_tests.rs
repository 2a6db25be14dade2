use crate::{html, mount_feat_index, mount_root, test_config, FEAT_INDEX};
use async_trait::async_trait;
use prd_harvest::loader::EntityList;
use prd_harvest::model::{Entity, Feat, Source};
use prd_harvest::{EntityKind, HarvestError, Loader, LoaderRegistry};
use std::sync::Arc;
use wiremock::{MockServer, ResponseTemplate};

/// Loader that always succeeds without network access
struct FixedLoader;

#[async_trait]
impl Loader for FixedLoader {
    fn kind(&self) -> EntityKind {
        EntityKind::new("trait")
    }

    async fn load(&self) -> Result<EntityList, HarvestError> {
        let entity = Feat::new(
            "Reactionary",
            None,
            "+2 trait bonus on initiative checks",
            Vec::new(),
            Some(Source::AdvancedPlayersGuide),
        )?;
        Ok(vec![Arc::new(entity) as Arc<dyn Entity>])
    }
}

#[tokio::test]
async fn test_registry_runs_feat_loader() {
    let server = MockServer::start().await;
    mount_root(&server, 1).await;
    mount_feat_index(&server, html(FEAT_INDEX)).await;

    let registry =
        LoaderRegistry::from_config(&test_config(&server), None).expect("Failed to build registry");
    let results = registry.run_all().await;

    let feats = results[&EntityKind::FEAT].as_ref().expect("Feat loader failed");
    let names: Vec<&str> = feats.iter().map(|f| f.name()).collect();
    assert_eq!(
        names,
        vec!["Dodge", "Mobility", "Coordinated Defense", "Craft Cybernetics", "Awesome Blow"]
    );
}

#[tokio::test]
async fn test_failing_kind_does_not_affect_others() {
    let server = MockServer::start().await;
    // One catalog per registry, so one root fetch per pass
    mount_root(&server, 2).await;
    mount_feat_index(&server, ResponseTemplate::new(500)).await;

    for sequential in [false, true] {
        let mut config = test_config(&server);
        config.loader.concurrent = !sequential;

        let mut registry = LoaderRegistry::from_config(&config, None).unwrap();
        registry.register(Arc::new(FixedLoader));
        let results = registry.run_all().await;

        assert_eq!(results.len(), 2);
        let feat_error = results[&EntityKind::FEAT].as_ref().unwrap_err();
        assert!(matches!(feat_error, HarvestError::Network { .. }));

        let traits = results[&EntityKind::new("trait")].as_ref().unwrap();
        assert_eq!(traits.len(), 1);
        assert_eq!(traits[0].display_name(), "Reactionary (Advanced Players Guide)");
    }
}

#[tokio::test]
async fn test_missing_root_page_does_not_block_feats() {
    let server = MockServer::start().await;
    // No root page mounted: the catalog warm-up gets a 404
    mount_feat_index(&server, html(FEAT_INDEX)).await;

    let registry = LoaderRegistry::from_config(&test_config(&server), None).unwrap();
    let results = registry.run_all().await;

    assert_eq!(results[&EntityKind::FEAT].as_ref().unwrap().len(), 5);
}

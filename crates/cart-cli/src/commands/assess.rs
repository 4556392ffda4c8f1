use std::path::Path;

use anyhow::Context;
use cart_core::{CartAssessment, parse_cart_str};
use cart_emissions::CartAssessor;
use cart_lookup::{ProductCache, ProductSource};
use tokio::io::AsyncReadExt;

use crate::cli::root_commands::AssessArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{self, table::TableOptions};

/// Handle `cartco2 assess`.
pub async fn handle(
    args: &AssessArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let input = read_input(args.file.as_deref()).await?;
    let assessment = assess_input(&input, &ctx.assessor).await?;

    if flags.format == OutputFormat::Table {
        println!("{}", render_assessment_table(&assessment)?);
        return Ok(());
    }
    output::output(&assessment, flags.format)
}

/// Decode a cart payload and assess it.
pub async fn assess_input<S, C>(
    input: &str,
    assessor: &CartAssessor<S, C>,
) -> anyhow::Result<CartAssessment>
where
    S: ProductSource,
    C: ProductCache,
{
    let items = parse_cart_str(input).context("invalid cart payload")?;
    tracing::debug!(items = items.len(), "assessing cart");
    Ok(assessor.assess(&items).await)
}

async fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) if path != Path::new("-") => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read cart file {}", path.display())),
        _ => {
            let mut input = String::new();
            tokio::io::stdin()
                .read_to_string(&mut input)
                .await
                .context("failed to read cart from stdin")?;
            Ok(input)
        }
    }
}

/// Summary block followed by the per-item breakdown.
fn render_assessment_table(assessment: &CartAssessment) -> anyhow::Result<String> {
    let options = TableOptions::from_env();
    let summary = output::render(&assessment.summary, OutputFormat::Table)?;
    let highest = assessment
        .highest_risk_item
        .as_ref()
        .map_or_else(|| String::from("-"), |item| item.name.clone());
    let items = output::render_array_table(
        &assessment
            .items
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?,
        options,
    );
    Ok(format!("{summary}\n\nhighest: {highest}\n\n{items}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cart_config::{CartConfig, LookupConfig};
    use cart_core::AssessmentStatus;
    use cart_emissions::assessor_from_config;

    fn offline() -> cart_emissions::DefaultAssessor {
        let config = CartConfig {
            lookup: LookupConfig {
                enabled: false,
                ..LookupConfig::default()
            },
            ..CartConfig::default()
        };
        assessor_from_config(&config).expect("assessor builds")
    }

    #[tokio::test]
    async fn assess_input_envelope() {
        let input = r#"{"cart":[
            {"name":"Brazilian Soy","quantity":2},
            {"name":"Wheat flour","quantity":5}
        ]}"#;
        let assessment = assess_input(input, &offline()).await.unwrap();

        assert_eq!(assessment.items.len(), 2);
        assert!((assessment.summary.total_emissions_kg - 5.54).abs() < 1e-9);
        assert_eq!(assessment.summary.status, AssessmentStatus::Pass);
    }

    #[tokio::test]
    async fn assess_input_rejects_non_list_cart() {
        let err = assess_input(r#"{"cart": {"name": "rice"}}"#, &offline())
            .await
            .unwrap_err();
        assert!(format!("{err:#}").contains("cart must be a list"));
    }

    #[tokio::test]
    async fn read_input_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");
        std::fs::write(&path, r#"[{"name":"oats"}]"#).unwrap();

        let input = read_input(Some(&path)).await.unwrap();
        let assessment = assess_input(&input, &offline()).await.unwrap();
        assert!((assessment.items[0].base_factor_kg - 0.4).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn read_input_missing_file_has_context() {
        let err = read_input(Some(Path::new("/nonexistent/cart.json")))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("failed to read cart file"));
    }

    #[tokio::test]
    async fn table_render_lists_items() {
        let assessment = assess_input(r#"[{"name":"beef","quantity":1}]"#, &offline())
            .await
            .unwrap();
        let table = render_assessment_table(&assessment).unwrap();
        assert!(table.contains("FAIL"));
        assert!(table.contains("highest: beef"));
        assert!(table.contains("emissions_kg"));
    }
}

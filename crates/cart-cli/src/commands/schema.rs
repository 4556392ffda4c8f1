use cart_core::CartAssessment;

/// JSON schema of the `assess` output.
pub fn assessment_schema() -> anyhow::Result<serde_json::Value> {
    Ok(serde_json::to_value(schemars::schema_for!(CartAssessment))?)
}

/// Handle `cartco2 schema`.
pub fn handle() -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&assessment_schema()?)?);
    Ok(())
}

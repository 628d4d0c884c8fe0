//! Batch SNP analysis
//!
//! Turns an `{"snps": [...]}` request into an ordered list of results, one per
//! input record. Records that fail validation or prediction become error
//! entries in place, so the output always lines up with the input.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Error;
use crate::model::PredictionModel;
use crate::variant::{Chromosome, Genotype, Prediction, Variant, VariantError};

/// Request body for SNP analysis
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeRequest {
    /// Raw SNP records; validated one by one during analysis
    #[serde(default)]
    pub snps: Vec<Value>,
}

impl AnalyzeRequest {
    /// Decode a request from a JSON body
    pub fn from_slice(body: &[u8]) -> Result<Self, Error> {
        Ok(serde_json::from_slice(body)?)
    }
}

/// Response body for SNP analysis
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeResponse {
    /// One entry per input record, in input order
    pub results: Vec<AnalysisResult>,
}

impl AnalyzeResponse {
    /// Number of records that could not be scored
    pub fn failed_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r, AnalysisResult::Failed(_)))
            .count()
    }
}

/// Outcome for a single record
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AnalysisResult {
    Scored(ScoredVariant),
    Failed(FailedVariant),
}

/// A scored record, echoing the input fields as received
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredVariant {
    pub rs_id: String,
    pub chromosome: Value,
    pub position: Value,
    pub genotype: Value,
    pub predictions: Prediction,
}

/// A record that could not be scored
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FailedVariant {
    /// Position of the record in the request
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rs_id: Option<String>,
    pub error: String,
}

/// Look up a field, treating JSON `null` as absent
fn required<'a>(
    fields: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a Value, VariantError> {
    match fields.get(field) {
        None | Some(Value::Null) => Err(VariantError::MissingField(field)),
        Some(value) => Ok(value),
    }
}

fn parse_rs_id(value: &Value) -> Result<String, VariantError> {
    match value.as_str() {
        Some(s) if !s.trim().is_empty() => Ok(s.to_string()),
        _ => Err(VariantError::WrongType {
            field: "rsId",
            expected: "a non-empty string",
        }),
    }
}

fn parse_chromosome(value: &Value) -> Result<Chromosome, VariantError> {
    match value {
        Value::String(s) => s.parse(),
        Value::Number(n) => n
            .as_u64()
            .and_then(Chromosome::from_number)
            .ok_or_else(|| VariantError::InvalidChromosome(n.to_string())),
        _ => Err(VariantError::WrongType {
            field: "chromosome",
            expected: "a string or integer",
        }),
    }
}

fn parse_position(value: &Value) -> Result<u64, VariantError> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| VariantError::InvalidPosition(n.to_string())),
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|_| VariantError::InvalidPosition(s.clone())),
        _ => Err(VariantError::WrongType {
            field: "position",
            expected: "a non-negative integer",
        }),
    }
}

fn parse_genotype(value: &Value) -> Result<Genotype, VariantError> {
    match value.as_str() {
        Some(s) => Genotype::parse(s),
        None => Err(VariantError::WrongType {
            field: "genotype",
            expected: "a string",
        }),
    }
}

/// Validate the fields of one SNP record
pub fn parse_variant(fields: &Map<String, Value>) -> Result<Variant, VariantError> {
    Ok(Variant {
        rs_id: parse_rs_id(required(fields, "rsId")?)?,
        chromosome: parse_chromosome(required(fields, "chromosome")?)?,
        position: parse_position(required(fields, "position")?)?,
        genotype: parse_genotype(required(fields, "genotype")?)?,
    })
}

async fn analyze_record(
    model: &dyn PredictionModel,
    index: usize,
    record: Value,
) -> AnalysisResult {
    let rs_id = record.get("rsId").and_then(Value::as_str).map(str::to_string);
    let failed = |error: String| {
        tracing::debug!(index, "SNP record not scored: {}", error);
        AnalysisResult::Failed(FailedVariant {
            index,
            rs_id: rs_id.clone(),
            error,
        })
    };

    let Value::Object(mut fields) = record else {
        return failed(VariantError::NotAnObject.to_string());
    };

    let variant = match parse_variant(&fields) {
        Ok(variant) => variant,
        Err(e) => return failed(e.to_string()),
    };

    match model.predict(&variant).await {
        Ok(predictions) => AnalysisResult::Scored(ScoredVariant {
            rs_id: variant.rs_id,
            chromosome: fields.remove("chromosome").unwrap_or(Value::Null),
            position: fields.remove("position").unwrap_or(Value::Null),
            genotype: fields.remove("genotype").unwrap_or(Value::Null),
            predictions,
        }),
        Err(e) => failed(e.to_string()),
    }
}

/// Score every record of a request with the given model
pub async fn analyze(model: &dyn PredictionModel, request: AnalyzeRequest) -> AnalyzeResponse {
    let mut results = Vec::with_capacity(request.snps.len());
    for (index, record) in request.snps.into_iter().enumerate() {
        results.push(analyze_record(model, index, record).await);
    }
    AnalyzeResponse { results }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HealthCheckResult, HeuristicModel, ModelError};
    use serde_json::json;

    fn request(value: Value) -> AnalyzeRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_from_slice_missing_snps_is_empty() {
        let request = AnalyzeRequest::from_slice(b"{}").unwrap();
        assert!(request.snps.is_empty());
    }

    #[test]
    fn test_from_slice_malformed() {
        assert!(matches!(
            AnalyzeRequest::from_slice(b"not json"),
            Err(Error::MalformedRequest(_))
        ));
        assert!(AnalyzeRequest::from_slice(br#"{"snps": {"rsId": "rs1"}}"#).is_err());
        assert!(AnalyzeRequest::from_slice(br#"{"snps": null}"#).is_err());
        assert!(AnalyzeRequest::from_slice(b"").is_err());
    }

    #[test]
    fn test_parse_variant_accepts_strings_and_numbers() {
        let value =
            json!({"rsId": "rs1", "chromosome": "chrX", "position": "1200", "genotype": "ag"});
        let variant = parse_variant(value.as_object().unwrap()).unwrap();
        assert_eq!(variant.chromosome, Chromosome::X);
        assert_eq!(variant.position, 1200);
        assert_eq!(variant.genotype.as_str(), "AG");

        let value = json!({"rsId": "rs2", "chromosome": 7, "position": 42, "genotype": "C"});
        let variant = parse_variant(value.as_object().unwrap()).unwrap();
        assert_eq!(variant.chromosome, Chromosome::Autosome(7));
        assert_eq!(variant.position, 42);
    }

    #[test]
    fn test_parse_variant_missing_field() {
        let value = json!({"rsId": "rs1", "chromosome": "1", "genotype": "AA"});
        assert_eq!(
            parse_variant(value.as_object().unwrap()),
            Err(VariantError::MissingField("position"))
        );

        let value = json!({"rsId": "rs1", "chromosome": null, "position": 1, "genotype": "AA"});
        assert_eq!(
            parse_variant(value.as_object().unwrap()),
            Err(VariantError::MissingField("chromosome"))
        );
    }

    #[test]
    fn test_parse_variant_invalid_values() {
        let value = json!({"rsId": "rs1", "chromosome": "1", "position": -5, "genotype": "AA"});
        assert!(matches!(
            parse_variant(value.as_object().unwrap()),
            Err(VariantError::InvalidPosition(_))
        ));

        let value = json!({"rsId": "rs1", "chromosome": 30, "position": 5, "genotype": "AA"});
        assert!(matches!(
            parse_variant(value.as_object().unwrap()),
            Err(VariantError::InvalidChromosome(_))
        ));

        let value = json!({"rsId": 12, "chromosome": "1", "position": 5, "genotype": "AA"});
        assert!(matches!(
            parse_variant(value.as_object().unwrap()),
            Err(VariantError::WrongType { field: "rsId", .. })
        ));
    }

    #[tokio::test]
    async fn test_analyze_preserves_order_and_length() {
        let request = request(json!({"snps": [
            {"rsId": "rs1", "chromosome": "1", "position": 500, "genotype": "AG"},
            {"rsId": "rs2", "chromosome": "2"},
            "not an object",
            {"rsId": "rs4", "chromosome": 22, "position": 999, "genotype": "TT"}
        ]}));

        let response = analyze(&HeuristicModel, request).await;
        assert_eq!(response.results.len(), 4);
        assert_eq!(response.failed_count(), 2);

        match &response.results[0] {
            AnalysisResult::Scored(scored) => {
                assert_eq!(scored.rs_id, "rs1");
                assert_eq!(scored.predictions.pathogenicity, 0.46);
                assert_eq!(scored.predictions.effect, "Moderate impact");
            }
            other => panic!("expected scored result, got {:?}", other),
        }
        match &response.results[1] {
            AnalysisResult::Failed(failed) => {
                assert_eq!(failed.index, 1);
                assert_eq!(failed.rs_id.as_deref(), Some("rs2"));
                assert_eq!(failed.error, "missing required field 'position'");
            }
            other => panic!("expected failed result, got {:?}", other),
        }
        match &response.results[2] {
            AnalysisResult::Failed(failed) => {
                assert_eq!(failed.index, 2);
                assert!(failed.rs_id.is_none());
            }
            other => panic!("expected failed result, got {:?}", other),
        }
        assert!(matches!(&response.results[3], AnalysisResult::Scored(s) if s.rs_id == "rs4"));
    }

    #[tokio::test]
    async fn test_analyze_echoes_input_values() {
        let request = request(json!({"snps": [
            {"rsId": "rs1", "chromosome": 1, "position": "500", "genotype": "ag"}
        ]}));

        let response = analyze(&HeuristicModel, request).await;
        let json = serde_json::to_value(&response).unwrap();
        let result = &json["results"][0];
        assert_eq!(result["rsId"], "rs1");
        assert_eq!(result["chromosome"], 1);
        assert_eq!(result["position"], "500");
        assert_eq!(result["genotype"], "ag");
        assert_eq!(result["predictions"]["confidence"], 0.75);
    }

    struct FailingModel;

    #[async_trait::async_trait]
    impl PredictionModel for FailingModel {
        async fn predict(&self, _variant: &Variant) -> Result<Prediction, ModelError> {
            Err(ModelError::Unavailable {
                model: "failing",
                reason: "offline".to_string(),
            })
        }

        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult::Unhealthy {
                reason: "offline".to_string(),
            }
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    #[tokio::test]
    async fn test_analyze_model_failure_becomes_error_entry() {
        let request = request(json!({"snps": [
            {"rsId": "rs1", "chromosome": "1", "position": 1, "genotype": "A"}
        ]}));

        let response = analyze(&FailingModel, request).await;
        match &response.results[0] {
            AnalysisResult::Failed(failed) => {
                assert_eq!(failed.error, "model 'failing' is unavailable: offline");
            }
            other => panic!("expected failed result, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_analyze_empty_request() {
        let response = analyze(&HeuristicModel, AnalyzeRequest::default()).await;
        assert!(response.results.is_empty());
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"results":[]}"#
        );
    }
}

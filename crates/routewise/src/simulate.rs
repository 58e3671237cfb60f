// SPDX-FileCopyrightText: 2026 Routewise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `routewise simulate`: the chat integration workflow, on paper.
//!
//! Shows how a routed model would be placed into a workspace chat request.
//! Nothing is sent; the response step is a fixed placeholder.

use colored::Colorize;
use routewise_config::model::IntegrationConfig;
use routewise_core::ModelId;
use routewise_router::{mean_positive_savings, ModelRouter, RoutingDecision};
use serde::Serialize;
use tracing::info;

use crate::report::{format_model, format_scores};

/// Header width for each workflow block.
const BLOCK_WIDTH: usize = 60;

/// Chat request body for a workspace chat endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    pub mode: String,
    pub model: ModelId,
    pub workspace_id: String,
}

/// Everything the workflow produced for one question.
#[derive(Debug, Clone, Serialize)]
pub struct Workflow {
    pub question: String,
    pub decision: RoutingDecision,
    pub endpoint: String,
    pub payload: ChatRequest,
    pub baseline: ModelId,
    pub time_saved_secs: f64,
    pub quality_delta: f64,
}

/// Every workflow of a batch run with the average saving over the faster ones.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub workflows: Vec<Workflow>,
    pub average_savings: Option<f64>,
}

impl BatchReport {
    pub fn new(workflows: Vec<Workflow>) -> Self {
        let average_savings = mean_positive_savings(workflows.iter().map(|w| w.time_saved_secs));
        Self {
            workflows,
            average_savings,
        }
    }
}

/// Builds simulated chat requests with routed models.
pub struct ChatIntegration<'a> {
    router: &'a ModelRouter,
    config: &'a IntegrationConfig,
    baseline: ModelId,
}

impl<'a> ChatIntegration<'a> {
    pub fn new(router: &'a ModelRouter, config: &'a IntegrationConfig, baseline: ModelId) -> Self {
        Self {
            router,
            config,
            baseline,
        }
    }

    /// Route a question and build the request that would carry it.
    ///
    /// `workspace_id` overrides the configured workspace.
    pub fn run(&self, question: &str, workspace_id: Option<&str>) -> Workflow {
        let workspace_id = workspace_id.unwrap_or(&self.config.workspace_id);
        let decision = self.router.route(question);
        let endpoint = chat_endpoint(&self.config.api_base, workspace_id);

        let base = self.baseline.profile();
        let routed = decision.model.profile();

        info!(
            model = %decision.model,
            endpoint = endpoint.as_str(),
            "simulated chat request"
        );

        Workflow {
            question: question.to_string(),
            payload: ChatRequest {
                message: question.to_string(),
                mode: self.config.mode.clone(),
                model: decision.model,
                workspace_id: workspace_id.to_string(),
            },
            endpoint,
            baseline: self.baseline,
            time_saved_secs: base.speed_secs - routed.speed_secs,
            quality_delta: routed.quality - base.quality,
            decision,
        }
    }
}

/// `POST` target for a workspace chat.
pub fn chat_endpoint(api_base: &str, workspace_id: &str) -> String {
    format!(
        "{}/workspace/{workspace_id}/chat",
        api_base.trim_end_matches('/')
    )
}

fn section(title: &str, color: bool) -> String {
    if color {
        format!("\n{}\n", title.bold())
    } else {
        format!("\n{title}\n")
    }
}

/// Step-by-step report of one workflow.
pub fn format_workflow(w: &Workflow, color: bool) -> String {
    let f = &w.decision.features;
    let mut out = String::from("COMPLETE INTEGRATION WORKFLOW\n");
    out.push_str(&"=".repeat(BLOCK_WIDTH));
    out.push('\n');

    out.push_str(&section("1. QUESTION ANALYSIS", color));
    out.push_str(&format!("- Scores: {}\n", format_scores(f)));
    out.push_str(&format!("- Complexity: {}\n", f.complexity));

    out.push_str(&section("2. MODEL SELECTION", color));
    out.push_str(&format!(
        "- Selected model: {}\n",
        format_model(w.decision.model, color)
    ));
    out.push_str(&format!("- Reason: {}\n", w.decision.reason()));

    out.push_str(&section("3. API REQUEST (not sent)", color));
    out.push_str(&format!("- Endpoint: POST {}\n", w.endpoint));
    out.push_str("- Headers: Content-Type: application/json, Authorization: Bearer <API_KEY>\n");
    let payload = serde_json::to_string_pretty(&w.payload).unwrap_or_else(|_| "{}".to_string());
    out.push_str(&format!("- Payload: {payload}\n"));

    out.push_str(&section("4. SIMULATED RESPONSE", color));
    out.push_str("- Status: 200 OK\n");
    out.push_str("- Response: chat response would be returned here\n");
    out.push_str(&format!(
        "- Model used: {} (overrides the workspace's static model)\n",
        w.decision.model
    ));

    let base = w.baseline.profile();
    let routed = w.decision.model.profile();
    out.push_str(&section("5. PERFORMANCE COMPARISON", color));
    out.push_str(&format!(
        "- Baseline ({}): {:.1}s, {}/10\n",
        w.baseline, base.speed_secs, base.quality
    ));
    out.push_str(&format!(
        "- Routed ({}): {:.1}s, {}/10\n",
        w.decision.model, routed.speed_secs, routed.quality
    ));
    out.push_str(&format!("- Improvement: {:.1}s faster\n", w.time_saved_secs));
    if w.quality_delta < 0.0 {
        out.push_str(&format!(
            "- Trade-off: {:.1} quality points for speed\n",
            w.quality_delta.abs()
        ));
    } else {
        out.push_str(&format!(
            "- Bonus: {:.1} quality points improvement\n",
            w.quality_delta
        ));
    }
    out.push_str(&"=".repeat(BLOCK_WIDTH));
    out.push('\n');
    out
}

/// Closing line of a batch run.
pub fn format_batch_summary(average_savings: Option<f64>) -> String {
    match average_savings {
        Some(avg) => format!(
            "\nOVERALL INTEGRATION BENEFITS:\nAverage time savings per query: {avg:.1}s\n"
        ),
        None => "\nOVERALL INTEGRATION BENEFITS:\nNo query was faster than the baseline\n"
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use routewise_router::comparison::INTEGRATION_QUESTIONS;

    fn integration() -> IntegrationConfig {
        IntegrationConfig::default()
    }

    #[test]
    fn endpoint_joins_base_and_workspace() {
        assert_eq!(
            chat_endpoint("http://localhost:3000/api/v1", "default-workspace"),
            "http://localhost:3000/api/v1/workspace/default-workspace/chat"
        );
        assert_eq!(
            chat_endpoint("http://localhost:3000/api/v1/", "ws"),
            "http://localhost:3000/api/v1/workspace/ws/chat"
        );
    }

    #[test]
    fn payload_uses_camel_case_workspace_id() {
        let router = ModelRouter::default();
        let config = integration();
        let w = ChatIntegration::new(&router, &config, ModelId::GtOss20b)
            .run("Describe PEAS full form", None);
        let json = serde_json::to_value(&w.payload).unwrap();
        assert_eq!(json["message"], "Describe PEAS full form");
        assert_eq!(json["mode"], "query");
        assert_eq!(json["model"], "deepseek-r1:14b");
        assert_eq!(json["workspaceId"], "default-workspace");
        assert!(json.get("workspace_id").is_none());
    }

    #[test]
    fn workspace_override() {
        let router = ModelRouter::default();
        let config = integration();
        let w = ChatIntegration::new(&router, &config, ModelId::GtOss20b)
            .run("List the PEAS components", Some("lab3"));
        assert_eq!(w.payload.workspace_id, "lab3");
        assert!(w.endpoint.ends_with("/workspace/lab3/chat"));
    }

    #[test]
    fn workflow_report_shows_trade_off() {
        let router = ModelRouter::default();
        let config = integration();
        let w = ChatIntegration::new(&router, &config, ModelId::GtOss20b)
            .run("What is the PEAS description of automated taxi drivers?", None);
        assert_eq!(w.decision.model, ModelId::Llama2Chinese);
        let out = format_workflow(&w, false);
        assert!(out.contains("- Endpoint: POST http://localhost:3000/api/v1/workspace/default-workspace/chat"));
        assert!(out.contains("\"workspaceId\": \"default-workspace\""));
        assert!(out.contains("- Improvement: 5.0s faster"));
        assert!(out.contains("- Trade-off: 3.7 quality points for speed"));
    }

    #[test]
    fn workflow_report_shows_bonus_when_quality_holds() {
        let router = ModelRouter::default();
        let config = integration();
        let w = ChatIntegration::new(&router, &config, ModelId::GtOss20b)
            .run("Define algorithm complexity and performance metrics", None);
        let out = format_workflow(&w, false);
        assert!(out.contains("- Improvement: 0.0s faster"));
        assert!(out.contains("- Bonus: 0.0 quality points improvement"));
    }

    #[test]
    fn batch_report_averages_from_workflows() {
        let router = ModelRouter::default();
        let config = integration();
        let chat = ChatIntegration::new(&router, &config, ModelId::GtOss20b);
        let batch = BatchReport::new(
            INTEGRATION_QUESTIONS
                .iter()
                .map(|q| chat.run(q, None))
                .collect(),
        );
        assert_eq!(batch.workflows.len(), 4);
        // 5.0 and 2.0 saved; the two technical questions save nothing.
        assert!((batch.average_savings.unwrap() - 3.5).abs() < 1e-9);

        let json = serde_json::to_value(&batch).unwrap();
        assert_eq!(json["workflows"].as_array().unwrap().len(), 4);
        assert_eq!(json["average_savings"], 3.5);
    }

    #[test]
    fn batch_without_savings_serializes_null() {
        let router = ModelRouter::default();
        let config = integration();
        let w = ChatIntegration::new(&router, &config, ModelId::Llama2Chinese)
            .run("List the PEAS components", None);
        let json = serde_json::to_value(BatchReport::new(vec![w])).unwrap();
        assert!(json["average_savings"].is_null());
    }

    #[test]
    fn batch_summary() {
        assert!(format_batch_summary(Some(3.5)).contains("Average time savings per query: 3.5s"));
        assert!(format_batch_summary(None).contains("No query was faster"));
    }
}

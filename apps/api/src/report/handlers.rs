use axum::Json;
use serde::{Deserialize, Serialize};

use crate::report::{parse_report, to_html, ReportLine};

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    pub analysis: String,
}

#[derive(Debug, Serialize)]
pub struct RenderResponse {
    pub lines: Vec<ReportLine>,
    pub html: String,
}

/// POST /api/report/render
pub async fn handle_render(Json(req): Json<RenderRequest>) -> Json<RenderResponse> {
    let lines = parse_report(&req.analysis);
    let html = to_html(&lines);
    Json(RenderResponse { lines, html })
}

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;

use inventra_core::dashboard::{cost_history_start, upcoming_cutoff, UPCOMING_MAINTENANCE_LIMIT};
use inventra_db::models::dashboard::DashboardSummary;
use inventra_db::repositories::DashboardRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /dashboard -- counters, upcoming maintenance, status breakdown, and
/// monthly maintenance spend.
pub async fn get_dashboard(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let today = Utc::now().date_naive();

    let totals = DashboardRepo::totals(&state.pool).await?;
    let upcoming_maintenance = DashboardRepo::upcoming_maintenance(
        &state.pool,
        upcoming_cutoff(today),
        UPCOMING_MAINTENANCE_LIMIT,
    )
    .await?;
    let status_breakdown = DashboardRepo::status_breakdown(&state.pool).await?;
    let monthly_costs = DashboardRepo::monthly_costs(&state.pool, cost_history_start(today)).await?;

    Ok(Json(DataResponse {
        data: DashboardSummary {
            totals,
            upcoming_maintenance,
            status_breakdown,
            monthly_costs,
        },
    }))
}

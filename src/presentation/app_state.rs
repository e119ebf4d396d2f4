// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use crate::application::streaming_service::StreamingDashboardService;

#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: DashboardService,
    pub streaming_service: StreamingDashboardService,
}

impl AppState {
    pub fn new(dashboard_service: DashboardService) -> Self {
        let streaming_service = StreamingDashboardService::new(dashboard_service.clone());
        Self {
            dashboard_service,
            streaming_service,
        }
    }
}

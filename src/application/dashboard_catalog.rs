// Static dashboard definitions published by this tool
use crate::domain::dashboard::{
    DashboardDefinition, DashboardPermissions, Layout, Page, QuerySpec, VisualizationKind, Widget,
};

pub const NRDOT_DASHBOARD_NAME: &str = "NRDOT v2 - Process Optimization Dashboard";

/// Build the NRDOT process optimization dashboard with every query bound to `account_id`.
pub fn nrdot_process_dashboard(account_id: u64, permissions: DashboardPermissions) -> DashboardDefinition {
    let widget = |title: &str, visualization: VisualizationKind, nrql: &str, layout: Layout| Widget {
        title: title.to_string(),
        visualization,
        queries: vec![QuerySpec::new(account_id, nrql)],
        layout,
    };

    let overview = Page {
        name: "Optimization Overview".to_string(),
        description: "Series reduction and ingest cost after process filtering".to_string(),
        widgets: vec![
            widget(
                "Process Series Reduction",
                VisualizationKind::Billboard,
                "SELECT latest(nrdot_process_series_reduction_percent) AS 'Reduction %' FROM Metric WHERE service.name = 'nrdot-collector' SINCE 1 hour ago",
                Layout::new(1, 1, 4, 3),
            ),
            widget(
                "Processes Kept vs Dropped",
                VisualizationKind::Billboard,
                "SELECT latest(nrdot_process_series_kept) AS 'Kept', latest(nrdot_process_series_dropped) AS 'Dropped' FROM Metric WHERE service.name = 'nrdot-collector' SINCE 1 hour ago",
                Layout::new(5, 1, 4, 3),
            ),
            widget(
                "Estimated Hourly Ingest Cost",
                VisualizationKind::Billboard,
                "SELECT latest(nrdot_estimated_cost_per_hour) AS 'USD / hour' FROM Metric WHERE service.name = 'nrdot-collector' SINCE 1 hour ago",
                Layout::new(9, 1, 4, 3),
            ),
            widget(
                "Process Series Over Time",
                VisualizationKind::Line,
                "SELECT average(nrdot_process_series_total) AS 'Total', average(nrdot_process_series_kept) AS 'Kept' FROM Metric WHERE service.name = 'nrdot-collector' TIMESERIES AUTO SINCE 6 hours ago",
                Layout::new(1, 4, 12, 3),
            ),
        ],
    };

    let processes = Page {
        name: "Process Details".to_string(),
        description: "Top resource consumers reported by the host receiver".to_string(),
        widgets: vec![
            widget(
                "Top Processes by CPU",
                VisualizationKind::Bar,
                "SELECT average(process.cpu.utilization) FROM Metric FACET process.executable.name LIMIT 10 SINCE 30 minutes ago",
                Layout::new(1, 1, 6, 4),
            ),
            widget(
                "Top Processes by Memory",
                VisualizationKind::Bar,
                "SELECT average(process.memory.usage) FROM Metric FACET process.executable.name LIMIT 10 SINCE 30 minutes ago",
                Layout::new(7, 1, 6, 4),
            ),
            widget(
                "CPU Utilization by Process",
                VisualizationKind::Line,
                "SELECT average(process.cpu.utilization) FROM Metric FACET process.executable.name LIMIT 5 TIMESERIES AUTO SINCE 3 hours ago",
                Layout::new(1, 5, 12, 3),
            ),
        ],
    };

    let collector = Page {
        name: "Collector Health".to_string(),
        description: "Pipeline throughput of the NRDOT collector".to_string(),
        widgets: vec![
            widget(
                "Accepted vs Exported Metric Points",
                VisualizationKind::Line,
                "SELECT rate(sum(otelcol_receiver_accepted_metric_points), 1 minute) AS 'Accepted', rate(sum(otelcol_exporter_sent_metric_points), 1 minute) AS 'Exported' FROM Metric TIMESERIES AUTO SINCE 3 hours ago",
                Layout::new(1, 1, 8, 3),
            ),
            widget(
                "Export Failures",
                VisualizationKind::Billboard,
                "SELECT sum(otelcol_exporter_send_failed_metric_points) AS 'Failed points' FROM Metric SINCE 1 hour ago",
                Layout::new(9, 1, 4, 3),
            ),
        ],
    };

    DashboardDefinition {
        name: NRDOT_DASHBOARD_NAME.to_string(),
        description: "Process metrics optimization achieved by the NRDOT v2 collector pipeline".to_string(),
        permissions,
        pages: vec![overview, processes, collector],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_query_bound_to_account() {
        let dashboard = nrdot_process_dashboard(12345, DashboardPermissions::default());

        assert!(dashboard.widgets().count() > 0);
        for widget in dashboard.widgets() {
            assert!(!widget.queries.is_empty(), "{} has no queries", widget.title);
            for query in &widget.queries {
                assert_eq!(query.account_id, 12345, "{} has wrong account", widget.title);
            }
        }
    }

    #[test]
    fn test_definition_passes_validation() {
        let dashboard = nrdot_process_dashboard(987, DashboardPermissions::PublicReadOnly);
        assert_eq!(dashboard.validate(987), Ok(()));
        assert_eq!(dashboard.name, NRDOT_DASHBOARD_NAME);
        assert_eq!(dashboard.permissions, DashboardPermissions::PublicReadOnly);
    }

    #[test]
    fn test_uses_each_visualization_kind() {
        let dashboard = nrdot_process_dashboard(1, DashboardPermissions::default());
        for kind in [VisualizationKind::Billboard, VisualizationKind::Line, VisualizationKind::Bar] {
            assert!(dashboard.widgets().any(|w| w.visualization == kind));
        }
    }
}

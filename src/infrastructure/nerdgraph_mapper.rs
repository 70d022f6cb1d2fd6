// Mapper to convert domain models to NerdGraph DashboardInput types
use serde::Serialize;

use crate::domain::dashboard::{
    DashboardDefinition, Layout, Page, QuerySpec, VisualizationKind, Widget,
};

#[derive(Debug, Clone, Serialize)]
pub struct DashboardInput {
    pub name: String,
    pub description: String,
    pub permissions: &'static str,
    pub pages: Vec<PageInput>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageInput {
    pub name: String,
    pub description: String,
    pub widgets: Vec<WidgetInput>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetInput {
    pub title: String,
    pub visualization: VisualizationInput,
    pub raw_configuration: RawConfigurationInput,
    pub layout: LayoutInput,
}

#[derive(Debug, Clone, Serialize)]
pub struct VisualizationInput {
    pub id: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawConfigurationInput {
    pub nrql_queries: Vec<NrqlQueryInput>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NrqlQueryInput {
    pub account_id: u64,
    pub query: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LayoutInput {
    pub column: u32,
    pub row: u32,
    pub width: u32,
    pub height: u32,
}

pub fn dashboard_to_input(dashboard: DashboardDefinition) -> DashboardInput {
    DashboardInput {
        name: dashboard.name,
        description: dashboard.description,
        permissions: dashboard.permissions.as_str(),
        pages: dashboard.pages.into_iter().map(page_to_input).collect(),
    }
}

fn page_to_input(page: Page) -> PageInput {
    PageInput {
        name: page.name,
        description: page.description,
        widgets: page.widgets.into_iter().map(widget_to_input).collect(),
    }
}

fn widget_to_input(widget: Widget) -> WidgetInput {
    WidgetInput {
        title: widget.title,
        visualization: VisualizationInput {
            id: visualization_id(widget.visualization),
        },
        raw_configuration: RawConfigurationInput {
            nrql_queries: widget.queries.into_iter().map(query_to_input).collect(),
        },
        layout: layout_to_input(widget.layout),
    }
}

fn visualization_id(kind: VisualizationKind) -> &'static str {
    match kind {
        VisualizationKind::Billboard => "viz.billboard",
        VisualizationKind::Line => "viz.line",
        VisualizationKind::Bar => "viz.bar",
    }
}

fn query_to_input(query: QuerySpec) -> NrqlQueryInput {
    NrqlQueryInput {
        account_id: query.account_id,
        query: query.nrql,
    }
}

fn layout_to_input(layout: Layout) -> LayoutInput {
    LayoutInput {
        column: layout.column,
        row: layout.row,
        width: layout.width,
        height: layout.height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dashboard::DashboardPermissions;
    use serde_json::json;

    #[test]
    fn test_widget_wire_shape() {
        let dashboard = DashboardDefinition {
            name: "Demo".to_string(),
            description: "Demo dashboard".to_string(),
            permissions: DashboardPermissions::PublicReadOnly,
            pages: vec![Page {
                name: "Overview".to_string(),
                description: "First page".to_string(),
                widgets: vec![Widget {
                    title: "Hosts".to_string(),
                    visualization: VisualizationKind::Billboard,
                    queries: vec![QuerySpec::new(42, "SELECT uniqueCount(host) FROM Metric")],
                    layout: Layout::new(1, 1, 4, 3),
                }],
            }],
        };

        let value = serde_json::to_value(dashboard_to_input(dashboard)).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Demo",
                "description": "Demo dashboard",
                "permissions": "PUBLIC_READ_ONLY",
                "pages": [{
                    "name": "Overview",
                    "description": "First page",
                    "widgets": [{
                        "title": "Hosts",
                        "visualization": { "id": "viz.billboard" },
                        "rawConfiguration": {
                            "nrqlQueries": [{ "accountId": 42, "query": "SELECT uniqueCount(host) FROM Metric" }]
                        },
                        "layout": { "column": 1, "row": 1, "width": 4, "height": 3 }
                    }]
                }]
            })
        );
    }

    #[test]
    fn test_visualization_ids() {
        assert_eq!(visualization_id(VisualizationKind::Line), "viz.line");
        assert_eq!(visualization_id(VisualizationKind::Bar), "viz.bar");
    }
}

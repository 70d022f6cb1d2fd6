// Dashboard domain model

/// Number of columns in the platform's layout grid.
pub const GRID_COLUMNS: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardPermissions {
    #[default]
    PublicReadWrite,
    PublicReadOnly,
    Private,
}

impl DashboardPermissions {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "PUBLIC_READ_WRITE" => Some(Self::PublicReadWrite),
            "PUBLIC_READ_ONLY" => Some(Self::PublicReadOnly),
            "PRIVATE" => Some(Self::Private),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PublicReadWrite => "PUBLIC_READ_WRITE",
            Self::PublicReadOnly => "PUBLIC_READ_ONLY",
            Self::Private => "PRIVATE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualizationKind {
    Billboard,
    Line,
    Bar,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySpec {
    pub account_id: u64,
    pub nrql: String,
}

impl QuerySpec {
    pub fn new(account_id: u64, nrql: impl Into<String>) -> Self {
        Self {
            account_id,
            nrql: nrql.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub column: u32,
    pub row: u32,
    pub width: u32,
    pub height: u32,
}

impl Layout {
    pub fn new(column: u32, row: u32, width: u32, height: u32) -> Self {
        Self {
            column,
            row,
            width,
            height,
        }
    }

    /// Columns and rows are 1-based; the rectangle must fit inside the grid.
    pub fn fits_grid(&self) -> bool {
        self.column >= 1
            && self.row >= 1
            && self.width >= 1
            && self.height >= 1
            && self.column + self.width - 1 <= GRID_COLUMNS
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Widget {
    pub title: String,
    pub visualization: VisualizationKind,
    pub queries: Vec<QuerySpec>,
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub name: String,
    pub description: String,
    pub widgets: Vec<Widget>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardDefinition {
    pub name: String,
    pub description: String,
    pub permissions: DashboardPermissions,
    pub pages: Vec<Page>,
}

impl DashboardDefinition {
    pub fn widgets(&self) -> impl Iterator<Item = &Widget> {
        self.pages.iter().flat_map(|page| page.widgets.iter())
    }

    /// Check the structural invariants that must hold before the definition is sent.
    /// NRQL text is not inspected.
    pub fn validate(&self, account_id: u64) -> Result<(), String> {
        if self.pages.is_empty() {
            return Err(format!("Dashboard '{}' has no pages", self.name));
        }

        for page in &self.pages {
            for widget in &page.widgets {
                if widget.queries.is_empty() {
                    return Err(format!(
                        "Widget '{}' on page '{}' has no queries",
                        widget.title, page.name
                    ));
                }
                if let Some(query) = widget.queries.iter().find(|q| q.account_id != account_id) {
                    return Err(format!(
                        "Widget '{}' on page '{}' is bound to account {} instead of {}",
                        widget.title, page.name, query.account_id, account_id
                    ));
                }
                if !widget.layout.fits_grid() {
                    return Err(format!(
                        "Widget '{}' on page '{}' does not fit the {}-column grid: {:?}",
                        widget.title, page.name, GRID_COLUMNS, widget.layout
                    ));
                }
            }
        }

        Ok(())
    }
}

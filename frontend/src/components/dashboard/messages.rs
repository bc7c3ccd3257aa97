use super::domain::Dashboard;

pub enum Msg<D: Dashboard> {
    SourcesLoaded(Vec<D::Source>),
    CatalogLoaded(Vec<D::Catalog>),
    FetchFailed(String),
    ToggleSort(D::Column),
    ToggleName(String),
    ClearNames,
    SetPage(usize),
    SetPageSize(usize),
}

use crate::errors::AppError;
use crate::models::page::{PageWindow, Pager};

/// A record that can live in a list collection. Identifiers are unique
/// within their collection.
pub trait ListRecord: Clone {
    fn id(&self) -> &str;
}

/// Conjunction of per-field predicates. An unset field matches every
/// record, so the default criteria select the whole collection.
pub trait RecordFilter<R>: Clone + Default {
    fn matches(&self, record: &R) -> bool;
}

/// Where freshly created records enter the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    First,
    Last,
}

/// The filter -> paginate core shared by all list screens.
///
/// The filtered view is a list of indices into the collection. It is
/// rebuilt from scratch by every operation that can invalidate it,
/// never patched incrementally, which keeps the subset invariant and
/// the page clamp trivially true after each mutation.
#[derive(Debug, Clone)]
pub struct ListCore<R: ListRecord, F: RecordFilter<R>> {
    entity: &'static str,
    records: Vec<R>,
    filtered: Vec<usize>,
    filter: F,
    pager: Pager,
}

impl<R: ListRecord, F: RecordFilter<R>> ListCore<R, F> {
    pub fn seeded(entity: &'static str, records: Vec<R>, per_page: usize) -> Self {
        let mut core = ListCore {
            entity,
            records,
            filtered: Vec::new(),
            filter: F::default(),
            pager: Pager::with_page_size(per_page),
        };
        core.recompute();
        core
    }

    pub fn entity(&self) -> &'static str {
        self.entity
    }

    /// The whole collection, presentation order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn filter(&self) -> &F {
        &self.filter
    }

    pub fn pager(&self) -> Pager {
        self.pager
    }

    pub fn find(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Records matching the active criteria, collection order.
    pub fn filtered_records(&self) -> Vec<&R> {
        self.filtered.iter().map(|&i| &self.records[i]).collect()
    }

    /// The slice of the filtered view shown on the current page.
    pub fn page_slice(&self) -> Vec<&R> {
        let (lo, hi) = self.pager.bounds(self.filtered.len());
        self.filtered[lo..hi].iter().map(|&i| &self.records[i]).collect()
    }

    pub fn window(&self) -> PageWindow {
        PageWindow::build(&self.pager, self.filtered.len())
    }

    /// Rebuild the filtered view and re-clamp the page.
    pub fn recompute(&mut self) {
        self.filtered = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, r)| self.filter.matches(r))
            .map(|(i, _)| i)
            .collect();
        self.pager.clamp(self.filtered.len());
    }

    /// Wholesale criteria replacement; the page resets to 1.
    pub fn set_filter(&mut self, filter: F) {
        self.filter = filter;
        self.pager.page = 1;
        self.recompute();
    }

    pub fn set_page(&mut self, page: usize) {
        self.pager.page = page;
        self.pager.clamp(self.filtered.len());
    }

    pub fn set_page_size(&mut self, per_page: usize) {
        self.pager.per_page = per_page.max(1);
        self.pager.page = 1;
    }

    pub fn insert(&mut self, record: R, placement: Placement) {
        match placement {
            Placement::First => self.records.insert(0, record),
            Placement::Last => self.records.push(record),
        }
        self.recompute();
    }

    /// Apply a mutation to one record, returning the updated copy.
    pub fn modify(&mut self, id: &str, apply: impl FnOnce(&mut R)) -> Result<R, AppError> {
        match self.records.iter_mut().find(|r| r.id() == id) {
            Some(record) => {
                apply(record);
                let updated = record.clone();
                self.recompute();
                Ok(updated)
            }
            None => Err(AppError::NotFound { entity: self.entity, id: id.to_string() }),
        }
    }

    /// Remove by id; `false` when the id is unknown.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id() != id);
        let removed = self.records.len() != before;
        if removed {
            self.recompute();
        }
        removed
    }

    /// Largest numeric suffix among ids starting with `prefix`, for
    /// seeding the id counter.
    pub fn max_id_suffix(&self, prefix: &str) -> u32 {
        self.records
            .iter()
            .filter_map(|r| r.id().strip_prefix(prefix))
            .filter_map(|rest| rest.parse::<u32>().ok())
            .max()
            .unwrap_or(0)
    }
}

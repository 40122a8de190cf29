use crate::{
    model::waitlist::{WaitlistEntryDto, WaitlistPageDto},
    server::model::db::WaitlistEntryModel,
};

/// Outcome of marking a waitlist entry as notified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderMark {
    /// The entry was pending and is now marked as sent
    Marked,
    /// The entry had already been marked; nothing changed
    AlreadySent,
}

/// Normalized page request for waitlist listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number
    pub page: u64,
    pub page_size: u64,
}

impl PageRequest {
    pub const DEFAULT_PAGE_SIZE: u64 = 10;

    /// Clamp a requested page below 1 to 1 and a page size below 1 to the default.
    pub fn new(page: Option<u64>, page_size: Option<u64>) -> Self {
        Self {
            page: page.filter(|p| *p >= 1).unwrap_or(1),
            page_size: page_size
                .filter(|s| *s >= 1)
                .unwrap_or(Self::DEFAULT_PAGE_SIZE),
        }
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.page_size
    }
}

/// One page of waiting subscribers, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitlistPage {
    pub total: u64,
    pub request: PageRequest,
    pub entries: Vec<WaitlistEntryModel>,
}

impl From<WaitlistEntryModel> for WaitlistEntryDto {
    fn from(model: WaitlistEntryModel) -> Self {
        Self {
            id: model.id,
            email: model.email,
            directory_entry_id: model.directory_entry_id,
            subscribed_at: model.subscribed_at,
            is_reminder_sent: model.is_reminder_sent,
        }
    }
}

impl From<WaitlistPage> for WaitlistPageDto {
    fn from(page: WaitlistPage) -> Self {
        Self {
            total: page.total,
            page: page.request.page,
            page_size: page.request.page_size,
            entries: page.entries.into_iter().map(Into::into).collect(),
        }
    }
}

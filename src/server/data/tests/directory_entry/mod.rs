mod count_sellable;
mod is_active;

use super::*;

use crate::server::data::directory_entry::DirectoryEntryRepository;

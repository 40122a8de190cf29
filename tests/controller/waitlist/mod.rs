//! Tests for opening waitlist endpoints.

mod list_waitlist;
mod subscribe;

use slotwarden::model::waitlist::{SubscribeDto, WaitlistPageDto, WaitlistQuery, WaitlistScopeDto};

use super::*;

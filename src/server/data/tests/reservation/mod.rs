mod count_active;
mod delete_expired_before;

use super::*;

use crate::server::{
    data::reservation::ReservationRepository, model::reservation::NewReservation,
};

//! Integration tests over the wired application with the in-memory
//! store provider.

mod helpers;

mod booking_test;
mod fee_test;
mod projection_test;
mod realtime_test;
mod rollover_test;
mod seat_test;

#[cfg(test)]
mod common;

#[cfg(test)]
mod dashboard_fetch_tests;

#[cfg(test)]
mod profile_update_tests;

#[cfg(test)]
mod session_tests;

#[cfg(test)]
mod error_message_tests;

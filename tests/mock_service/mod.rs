mod remove_interactions_tests;
mod transport_tests;
mod write_pact_tests;

mod decision_tests;
mod settings_tests;

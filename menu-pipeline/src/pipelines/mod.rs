pub mod menu_report;

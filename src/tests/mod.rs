mod config_loader_tests;

mod loaded_config;

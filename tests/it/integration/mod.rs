mod scene_controller_tests;

mod element_tests;
mod geometry_tests;
mod layout_tests;

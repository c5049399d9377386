//! different utility modules used throughout the project
/// tiny module to save sampled points into csv or text files and print them as a table
pub mod logger;
/// plot task: polynomial source + sampling method + view + output + logging settings
pub mod plot_task;
/// parse document with structure like " title1 key1: value1, value2 key2: value2 title2 key3:value3, value4" into HashMap
pub mod task_parser;
///
mod task_parser_tests;

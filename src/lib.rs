// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
#![allow(non_snake_case)]
pub mod Examples;
pub mod Utils;
pub mod polynomial;
pub mod sampling;

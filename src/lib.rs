// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod calc;
pub mod cli;
pub mod db;
pub mod models;
pub mod money;
pub mod transfer;
pub mod utils;
pub mod commands;

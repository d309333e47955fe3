// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod bills;
pub mod check;
pub mod calendar;
pub mod importer;
pub mod exporter;
pub mod doctor;
pub mod settings;

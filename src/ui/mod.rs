// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the portfolio viewer.

pub mod contact;
pub mod nav;
pub mod profile;
pub mod sections;

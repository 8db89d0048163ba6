// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

pub mod contact;
pub mod content;
pub mod navigation;
pub mod profile;

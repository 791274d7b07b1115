// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
pub mod challenge;
pub mod commit;
pub mod proof;
pub mod verify;

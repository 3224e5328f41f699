// Copyright 2014 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! DOM exceptions (§7). These are distinct from HTML5 parse errors: the
//! parser itself never raises them under normal operation, since token
//! handling never drives the DOM primitives through an invalid call.
//! They exist for external callers (and, in a few DOM primitives, for
//! defensive validation of hierarchy invariants).

use thiserror::Error;

/// The DOM exception taxonomy from spec §7.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomException {
    #[error("index or offset out of range")]
    IndexSize,

    #[error("the operation would produce an invalid node hierarchy")]
    HierarchyRequest,

    #[error("the node belongs to a different document")]
    WrongDocument,

    #[error("the name does not match the Name production")]
    InvalidCharacter,

    #[error("the reference node is not a child of this node")]
    NotFound,

    #[error("the operation is not supported for this node type")]
    NotSupported,

    #[error("the attribute is already in use by another element")]
    InUseAttribute,
}

pub type DomResult<T> = Result<T, DomException>;

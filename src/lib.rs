//! This crate is my collection of classic data structures and algorithms, written from scratch.
//!
//! # Purpose
//! This repo / crate is a project that I'm working on as a learning experience, with no expectation
//! for it to be used in production. Every structure here (a self-balancing search tree, a stack, a
//! ring-buffer queue, a binary heap and a union-find) is a textbook exercise, and writing them out
//! properly is the whole point.
//!
//! # Method
//! All structures are written based on my existing understanding and problem solving, taking a lot
//! of inspiration from [`std::collections`] without copying it. Where a structure *is* the exercise
//! (the tree's rotations, the queue's wrap-around arithmetic), it is built by hand; where storage is
//! incidental to the exercise (the heap's backing buffer), the standard primitives are used so the
//! interesting part stays in focus.
//!
//! Each container has exactly one canonical design. Competing variants of the same structure (an
//! array stack next to a linked stack, three flavours of queue) teach less than one variant done
//! carefully, so the alternatives were folded into the design notes instead of the source tree.
//!
//! # Error Handling
//! Accessors that can reasonably fail come in pairs: a plain method that panics with the message of
//! a strongly typed error, and a `try_` companion that returns an [`Option`] or [`Result`] for
//! callers that want to handle the failure themselves. Errors are plain structs implementing
//! [`Error`](std::error::Error), with derive macros covering the repetitive parts.
//!
//! # Dependencies
//! This crate depends on derive macros for its error types and on the `log` facade for the demo
//! binary's narration; the structures themselves stay dependency-free.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod algorithms;
pub mod structures;

pub(crate) mod util;

// SPDX-License-Identifier: MIT

//!
//! Procedural macros for writing years and calendar dates as literals that are
//! checked at compile time
//!
//! The generated code names `Year` and `CalendarDate` unqualified, so both
//! must be in scope where the macros are used.
//!

extern crate proc_macro;

use chrono::{Datelike, NaiveDate};
use proc_macro::TokenStream;
use quote::quote;
use std::str::FromStr;
use syn::{Expr, ExprLit, ExprUnary, Lit, LitStr, UnOp, parse_macro_input};

// Calendar date limits, kept in step with `heritage_dates_core::{MIN_YEAR, MAX_YEAR}`
const MIN_YEAR: i64 = -50000;
const MAX_YEAR: i64 = 10000;

/// Read an integer literal, allowing a leading minus sign
fn signed_int_literal(expr: &Expr) -> syn::Result<i64> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Int(lit), ..
        }) => lit.base10_parse::<i64>(),
        Expr::Unary(ExprUnary {
            op: UnOp::Neg(_),
            expr,
            ..
        }) => signed_int_literal(expr).map(|value| -value),
        _ => Err(syn::Error::new_spanned(expr, "Expected an integer literal")),
    }
}

/// Create a `Year`, using `year!(-450)`, with compile time checking of the value.
#[proc_macro]
pub fn year(input: TokenStream) -> TokenStream {
    let expr = parse_macro_input!(input as Expr);

    let value = match signed_int_literal(&expr) {
        Ok(value) => value,
        Err(error) => return error.to_compile_error().into(),
    };

    let Ok(value) = i32::try_from(value) else {
        return syn::Error::new_spanned(expr, "Year must fit in an i32")
            .to_compile_error()
            .into();
    };

    quote! {
        Year::from(#value)
    }
    .into()
}

/// Create a `CalendarDate`, using `date!("1066-10-14")`, with compile time
/// checking that the string is a real `YYYY-MM-DD` date.
#[proc_macro]
pub fn date(input: TokenStream) -> TokenStream {
    let lit = parse_macro_input!(input as LitStr);

    let Ok(date) = NaiveDate::from_str(&lit.value()) else {
        return syn::Error::new_spanned(lit, "Expected a valid YYYY-MM-DD date")
            .to_compile_error()
            .into();
    };

    let year = i64::from(date.year());
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return syn::Error::new_spanned(
            lit,
            format!("Year must be between {MIN_YEAR} and {MAX_YEAR}"),
        )
        .to_compile_error()
        .into();
    }

    let month = i64::from(date.month());
    let day = i64::from(date.day());
    quote! {
        CalendarDate::from(#day, #month, #year).unwrap()
    }
    .into()
}

//! Procedural macros for the `advent-framework` crate.

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{Error, Expr, Ident, Item, ItemImpl, ItemStruct, Token, Type, parse_macro_input};

/// Properties given to `#[solution_runner(...)]`.
struct RunnerProperties {
    /// Display title, any expression evaluating to `&str`.
    name: Expr,
    /// Optional `ParseData` type run once before the parts.
    parsed: Option<Type>,
    part_one: Type,
    part_two: Option<Type>,
}

fn set_once<T>(slot: &mut Option<T>, value: T, key: &Ident) -> syn::Result<()> {
    if slot.is_some() {
        return Err(Error::new(key.span(), format!("duplicate '{key}' property")));
    }
    *slot = Some(value);
    Ok(())
}

fn required<T>(slot: Option<T>, key: &str) -> syn::Result<T> {
    slot.ok_or_else(|| {
        Error::new(
            Span::call_site(),
            format!("missing required property: '{key}'"),
        )
    })
}

impl Parse for RunnerProperties {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut name = None;
        let mut parsed = None;
        let mut part_one = None;
        let mut part_two = None;

        while !input.is_empty() {
            let key: Ident = input.parse()?;
            input.parse::<Token![=]>()?;
            match key.to_string().as_str() {
                "name" => set_once(&mut name, input.parse()?, &key)?,
                "parsed" => set_once(&mut parsed, input.parse()?, &key)?,
                "part_one" => set_once(&mut part_one, input.parse()?, &key)?,
                "part_two" => set_once(&mut part_two, input.parse()?, &key)?,
                _ => {
                    return Err(Error::new(
                        key.span(),
                        "unsupported solution runner property",
                    ));
                }
            }

            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }

        Ok(Self {
            name: required(name, "name")?,
            parsed,
            part_one: required(part_one, "part_one")?,
            part_two,
        })
    }
}

impl RunnerProperties {
    /// The call into `advent_framework::runner` matching the given properties.
    fn solve_call(&self) -> TokenStream2 {
        let Self {
            name,
            parsed,
            part_one,
            part_two,
        } = self;

        let (function, generics) = match (parsed, part_two) {
            (None, None) => (quote!(solve_half_solution), quote!(#part_one)),
            (None, Some(part_two)) => (quote!(solve_full_solution), quote!(#part_one, #part_two)),
            (Some(parsed), None) => (
                quote!(solve_parsed_half_solution),
                quote!(#parsed, #part_one),
            ),
            (Some(parsed), Some(part_two)) => (
                quote!(solve_parsed_full_solution),
                quote!(#parsed, #part_one, #part_two),
            ),
        };

        quote! {
            ::advent_framework::runner::#function::<#generics>(#name, input, handler, timed)
        }
    }
}

/// The type receiving the `SolutionRunner` impl.
fn runner_target(item: &Item) -> syn::Result<TokenStream2> {
    match item {
        Item::Struct(ItemStruct {
            ident, generics, ..
        }) => {
            if !generics.params.is_empty() {
                return Err(Error::new_spanned(
                    generics,
                    "#[solution_runner] structs cannot be generic",
                ));
            }
            Ok(quote!(#ident))
        }
        Item::Impl(ItemImpl { self_ty, .. }) => Ok(quote!(#self_ty)),
        other => Err(Error::new_spanned(
            other,
            "the #[solution_runner] macro can only be applied to a struct or an impl block",
        )),
    }
}

/// Implements `advent_framework::runner::SolutionRunner` for a struct or the self type of an impl
/// block, routing to the runner function that matches the given properties.
///
/// # Properties
///
/// - `name` (required): the display title, an expression evaluating to `&str`.
/// - `part_one` (required): the type implementing `Solution<PartOne>`.
/// - `part_two`: the type implementing `Solution<PartTwo>`.
/// - `parsed`: a `ParseData` type parsed once and handed to both parts. Without it, parts receive
///   the raw input string.
///
/// Missing required properties, repeated properties, unknown properties, and use on anything other
/// than a struct or impl block are compile errors.
///
/// # Examples
///
/// ```ignore
/// #[solution_runner(
///     name = "Day 1: Historian Hysteria",
///     parsed = Lists,
///     part_one = Day01,
///     part_two = Day01
/// )]
/// impl super::AdventOfCode2024<1> {}
///
/// #[solution_runner(name = "Day 25: Code Chronicle", parsed = Schematics, part_one = Day25)]
/// struct Day25Runner;
/// ```
#[proc_macro_attribute]
pub fn solution_runner(args: TokenStream, item: TokenStream) -> TokenStream {
    let properties = parse_macro_input!(args as RunnerProperties);
    let item = parse_macro_input!(item as Item);

    let target = match runner_target(&item) {
        Ok(target) => target,
        Err(error) => return error.to_compile_error().into(),
    };
    let solve_call = properties.solve_call();

    TokenStream::from(quote! {
        #item

        impl ::advent_framework::runner::SolutionRunner for #target {
            fn run(
                input: &str,
                handler: &mut dyn ::advent_framework::runner::OutputHandler,
                timed: bool,
            ) -> ::advent_framework::DynamicResult<()> {
                #solve_call
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(properties: &str) -> syn::Result<String> {
        let properties: RunnerProperties = syn::parse_str(properties)?;
        Ok(properties.solve_call().to_string().replace(' ', ""))
    }

    #[test]
    fn part_one_only_runs_half_solution() -> syn::Result<()> {
        let call = render(r#"name = "Day 3", part_one = Day03"#)?;
        assert!(call.contains("solve_half_solution::<Day03>"));
        Ok(())
    }

    #[test]
    fn parsed_with_both_parts_runs_parsed_full_solution() -> syn::Result<()> {
        let call = render(r#"name = NAME, parsed = Map, part_one = Day06, part_two = Day06,"#)?;
        assert!(call.contains("solve_parsed_full_solution::<Map,Day06,Day06>(NAME,"));
        Ok(())
    }

    #[test]
    fn duplicate_property_is_rejected() {
        let result = syn::parse_str::<RunnerProperties>(r#"name = "a", name = "b", part_one = A"#);
        let error = result.err().map(|error| error.to_string());
        assert_eq!(error.as_deref(), Some("duplicate 'name' property"));
    }

    #[test]
    fn missing_part_one_is_rejected() {
        let result = syn::parse_str::<RunnerProperties>(r#"name = "a""#);
        let error = result.err().map(|error| error.to_string());
        assert_eq!(error.as_deref(), Some("missing required property: 'part_one'"));
    }

    #[test]
    fn unknown_property_is_rejected() {
        let result = syn::parse_str::<RunnerProperties>(r#"name = "a", part_three = C"#);
        assert!(result.is_err());
    }
}

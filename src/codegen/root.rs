//! Root template renderer.
//!
//! Serializes a [`Pyramid`] into the app's `root.svelte`: a single static
//! shell reused by every page. The shell owns the error branch, the store
//! context binding, page-store propagation after each update cycle, and
//! the assistive-technology announcement of client-side navigations.

use std::path::Path;

use super::pyramid::{Level, Pyramid};
use super::{GENERATED_BY, js_str};
use crate::utils::relative_import;

/// Render the `root.svelte` module.
///
/// `error` is the error component reference, `dir` the directory the
/// template is emitted into.
pub fn render_root_template(pyramid: &Pyramid, error: &str, dir: &Path) -> String {
    let mut out = String::with_capacity(4096);

    out.push_str("<!-- ");
    out.push_str(GENERATED_BY);
    out.push_str(" -->\n");

    render_script(pyramid, error, dir, &mut out);
    render_shell(pyramid, &mut out);
    render_announcer(&mut out);

    out
}

fn render_script(pyramid: &Pyramid, error: &str, dir: &Path, out: &mut String) {
    out.push_str("<script>\n");
    out.push_str("\timport { setContext, afterUpdate, onMount } from 'svelte';\n");
    out.push_str("\timport ErrorComponent from ");
    out.push_str(&js_str(&relative_import(dir, Path::new(error))));
    out.push_str(";\n\n");

    out.push_str("\t// error handling\n");
    out.push_str("\texport let status = undefined;\n");
    out.push_str("\texport let error = undefined;\n\n");

    out.push_str("\t// stores\n");
    out.push_str("\texport let stores;\n");
    out.push_str("\texport let page;\n\n");

    out.push_str("\texport let components;\n");
    for level in 0..pyramid.depth() {
        out.push_str(&format!("\texport let props_{level} = null;\n"));
    }
    out.push('\n');

    out.push_str("\tconst Layout = components[0];\n\n");

    out.push_str("\tsetContext('__svelte__', stores);\n\n");

    out.push_str("\t$: stores.page.set(page);\n");
    out.push_str("\tafterUpdate(stores.page.notify);\n\n");

    out.push_str("\tlet mounted = false;\n");
    out.push_str("\tlet navigated = false;\n");
    out.push_str("\tlet title = null;\n\n");

    out.push_str("\tonMount(() => {\n");
    out.push_str("\t\tconst unsubscribe = stores.page.subscribe(() => {\n");
    out.push_str("\t\t\tif (mounted) {\n");
    out.push_str("\t\t\t\tnavigated = true;\n");
    out.push_str("\t\t\t\ttitle = document.title;\n");
    out.push_str("\t\t\t}\n");
    out.push_str("\t\t});\n\n");
    out.push_str("\t\tmounted = true;\n");
    out.push_str("\t\treturn unsubscribe;\n");
    out.push_str("\t});\n");
    out.push_str("</script>\n\n");
}

/// The level-0 shell: root layout, error branch, then the nested levels.
fn render_shell(pyramid: &Pyramid, out: &mut String) {
    out.push_str("<Layout {...(props_0 || {})}>\n");
    out.push_str("\t{#if error}\n");
    out.push_str("\t\t<ErrorComponent {status} {error}/>\n");

    match &pyramid.root().child {
        Some(child) => {
            out.push_str("\t{:else}\n");
            out.push_str(&format!("\t\t{{#if components[{}]}}\n", child.index));
            render_level(child, out, 3);
            out.push_str("\t\t{/if}\n");
        }
        // Single-level app: nothing to nest below the shell.
        None => {}
    }

    out.push_str("\t{/if}\n");
    out.push_str("</Layout>\n\n");
}

/// Levels >= 1, innermost rendered unconditionally, every deeper level
/// guarded on its component's presence for the active page.
fn render_level(level: &Level, out: &mut String, indent: usize) {
    let tabs = "\t".repeat(indent);
    let index = level.index;

    match &level.child {
        None => {
            out.push_str(&format!(
                "{tabs}<svelte:component this={{components[{index}]}} {{...(props_{index} || {{}})}}/>\n"
            ));
        }
        Some(child) => {
            out.push_str(&format!(
                "{tabs}<svelte:component this={{components[{index}]}} {{...(props_{index} || {{}})}}>\n"
            ));
            out.push_str(&format!("{tabs}\t{{#if components[{}]}}\n", child.index));
            render_level(child, out, indent + 2);
            out.push_str(&format!("{tabs}\t{{/if}}\n"));
            out.push_str(&format!("{tabs}</svelte:component>\n"));
        }
    }
}

/// Visually hidden live region announcing the new document title after a
/// client-side navigation.
fn render_announcer(out: &mut String) {
    out.push_str("{#if mounted}\n");
    out.push_str("\t<div id=\"svelte-announcer\" aria-live=\"assertive\" aria-atomic=\"true\">\n");
    out.push_str("\t\t{#if navigated}\n");
    out.push_str("\t\t\tNavigated to {title}\n");
    out.push_str("\t\t{/if}\n");
    out.push_str("\t</div>\n");
    out.push_str("{/if}\n\n");

    out.push_str("<style>\n");
    out.push_str("\t#svelte-announcer {\n");
    out.push_str("\t\tposition: absolute;\n");
    out.push_str("\t\tleft: 0;\n");
    out.push_str("\t\ttop: 0;\n");
    out.push_str("\t\tclip: rect(0 0 0 0);\n");
    out.push_str("\t\tclip-path: inset(50%);\n");
    out.push_str("\t\toverflow: hidden;\n");
    out.push_str("\t\twhite-space: nowrap;\n");
    out.push_str("\t\twidth: 1px;\n");
    out.push_str("\t\theight: 1px;\n");
    out.push_str("\t}\n");
    out.push_str("</style>\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(max_depth: usize) -> String {
        let pyramid = Pyramid::build(max_depth);
        render_root_template(
            &pyramid,
            "src/routes/$error.svelte",
            Path::new(".weft/generated"),
        )
    }

    #[test]
    fn test_error_component_imported_relative() {
        let code = render(1);
        assert!(code.contains(
            "import ErrorComponent from \"../../src/routes/$error.svelte\";"
        ));
    }

    #[test]
    fn test_props_export_per_level() {
        let code = render(2);

        assert!(code.contains("export let props_0 = null;"));
        assert!(code.contains("export let props_1 = null;"));
        assert!(code.contains("export let props_2 = null;"));
        assert!(!code.contains("props_3"));
    }

    #[test]
    fn test_store_contract() {
        let code = render(1);

        assert!(code.contains("setContext('__svelte__', stores);"));
        assert!(code.contains("$: stores.page.set(page);"));
        assert!(code.contains("afterUpdate(stores.page.notify);"));
    }

    #[test]
    fn test_navigation_announcer() {
        let code = render(1);

        assert!(code.contains("aria-live=\"assertive\""));
        assert!(code.contains("Navigated to {title}"));
        assert!(code.contains("let mounted = false;"));
        assert!(code.contains("let navigated = false;"));
    }

    #[test]
    fn test_nested_levels_guarded_on_presence() {
        let code = render(2);

        assert!(code.contains("{#if components[1]}"));
        assert!(code.contains("{#if components[2]}"));
        assert!(code.contains("<svelte:component this={components[2]} {...(props_2 || {})}/>"));
    }

    #[test]
    fn test_error_branch_wraps_pyramid() {
        let code = render(1);

        let error_branch = code.find("{#if error}").unwrap();
        let else_branch = code.find("{:else}").unwrap();
        let nested = code.find("{#if components[1]}").unwrap();
        assert!(error_branch < else_branch && else_branch < nested);
    }

    #[test]
    fn test_zero_depth_has_no_nesting() {
        let code = render(0);

        assert!(code.contains("export let props_0 = null;"));
        assert!(!code.contains("props_1"));
        assert!(!code.contains("{:else}"));
        assert!(!code.contains("svelte:component"));
        assert!(code.contains("<Layout {...(props_0 || {})}>"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        assert_eq!(render(3), render(3));
    }
}

// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Light/dark mode switching.
//!
//! The colour values behind the theme tokens live in the stylesheet; all we
//! do here is toggle the `dark` class on `<html>` and remember the choice.

use super::button::{Button, ButtonSize, ButtonVariant};
use super::icons::Icon;
use maud::{Markup, PreEscaped, html};

/// `localStorage` key holding `"light"` or `"dark"`.
pub const STORAGE_KEY: &str = "theme";

/// Runs in `<head>` before first paint so a stored dark preference doesn't flash.
pub fn bootstrap_script() -> Markup {
    let js = format!(
        "(function(){{try{{var t=localStorage.getItem('{key}');\
         var d=t?t==='dark':window.matchMedia('(prefers-color-scheme: dark)').matches;\
         document.documentElement.classList.toggle('dark',d);}}catch(e){{}}}})();",
        key = STORAGE_KEY
    );
    html! {
        script { (PreEscaped(js)) }
    }
}

/// Click handler for the toggle button rendered by [`mode_toggle`].
pub fn toggle_script() -> Markup {
    let js = format!(
        "document.getElementById('mode-toggle').addEventListener('click',function(){{\
         var d=document.documentElement.classList.toggle('dark');\
         try{{localStorage.setItem('{key}',d?'dark':'light');}}catch(e){{}}}});",
        key = STORAGE_KEY
    );
    html! {
        script { (PreEscaped(js)) }
    }
}

/// Icon button that flips between light and dark mode.
pub fn mode_toggle() -> Markup {
    let icons = html! {
        (Icon::Sun.render("h-[1.2rem] w-[1.2rem] rotate-0 scale-100 transition-all dark:-rotate-90 dark:scale-0"))
        (Icon::Moon.render("absolute h-[1.2rem] w-[1.2rem] rotate-90 scale-0 transition-all dark:rotate-0 dark:scale-100"))
        span class="sr-only" { "Toggle theme" }
    };
    Button::new()
        .variant(ButtonVariant::Outline)
        .size(ButtonSize::Icon)
        .class_name("relative")
        .action("mode-toggle", "Toggle theme", icons)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripts_use_storage_key() {
        let boot = bootstrap_script().into_string();
        assert!(boot.starts_with("<script>(function(){"));
        assert!(boot.contains("localStorage.getItem('theme')"));
        assert!(boot.contains("prefers-color-scheme: dark"));
        let toggle = toggle_script().into_string();
        assert!(toggle.contains("getElementById('mode-toggle')"));
        assert!(toggle.contains("localStorage.setItem('theme'"));
    }

    #[test]
    fn test_toggle_button_has_both_icons() {
        let html = mode_toggle().into_string();
        assert!(html.contains("id=\"mode-toggle\""));
        assert_eq!(html.matches("<svg").count(), 2);
        assert!(html.contains("sr-only"));
    }
}

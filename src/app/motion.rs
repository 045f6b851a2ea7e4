use leptos::prelude::*;

/// Gap between successive children of a staggered section.
pub const STAGGER_STEP_MS: u32 = 200;
/// How long one element takes to fade in.
pub const FADE_DURATION_MS: u32 = 500;

/// One entry in an entrance sequence: the element fades in (and rises
/// 20px) after `delay_ms`, over `duration_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeIn {
    pub delay_ms: u32,
    pub duration_ms: u32,
}

impl FadeIn {
    /// Inline style consumed alongside the `fade-in-up` class.
    pub fn style(&self) -> String {
        format!(
            "animation-delay: {}ms; animation-duration: {}ms; animation-fill-mode: both",
            self.delay_ms, self.duration_ms
        )
    }
}

/// Entrance sequence for `count` sibling elements, first one immediate.
pub fn stagger(count: usize) -> Vec<FadeIn> {
    (0..count)
        .map(|i| FadeIn {
            delay_ms: i as u32 * STAGGER_STEP_MS,
            duration_ms: FADE_DURATION_MS,
        })
        .collect()
}

/// Keyframes behind the `fade-in-up` entries, the backdrop blobs, and the
/// toast. Rendered once at the bottom of the page.
#[component]
pub fn MotionStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            @keyframes fade-in-up {
                from {
                    opacity: 0;
                    transform: translateY(20px);
                }
                to {
                    opacity: 1;
                    transform: translateY(0);
                }
            }

            .fade-in-up {
                animation-name: fade-in-up;
                animation-timing-function: ease-out;
            }

            @keyframes backdrop-drift {
                0%, 100% { transform: translate(0, 0) scale(1); }
                33% { transform: translate(40px, -30px) scale(1.1); }
                66% { transform: translate(-30px, 20px) scale(0.95); }
            }

            .backdrop-blob {
                animation: backdrop-drift 18s ease-in-out infinite;
            }

            .backdrop-blob-slow {
                animation: backdrop-drift 26s ease-in-out infinite reverse;
            }

            @keyframes toast-rise {
                from {
                    opacity: 0;
                    transform: translateY(12px);
                }
                to {
                    opacity: 1;
                    transform: translateY(0);
                }
            }

            .toast-rise {
                animation: toast-rise 0.25s ease-out;
            }
            "#
        </style>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_spaces_delays_by_step() {
        let entries = stagger(4);
        let delays = entries.iter().map(|e| e.delay_ms).collect::<Vec<_>>();
        assert_eq!(delays, vec![0, 200, 400, 600]);
    }

    #[test]
    fn test_stagger_keeps_duration_constant() {
        assert!(stagger(6).iter().all(|e| e.duration_ms == FADE_DURATION_MS));
    }

    #[test]
    fn test_fade_in_style_is_inline_css() {
        let entry = FadeIn {
            delay_ms: 400,
            duration_ms: 500,
        };
        assert_eq!(
            entry.style(),
            "animation-delay: 400ms; animation-duration: 500ms; animation-fill-mode: both"
        );
    }
}

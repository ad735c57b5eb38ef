//! Extraction rule descriptors for each listing shape.

use crate::shape::ListingShape;
use scraper::{ElementRef, Selector};
use std::sync::LazyLock;

static ANCHOR: LazyLock<Selector> = LazyLock::new(|| selector("a"));

// Multi-class selectors match the whole `class` attribute, so an element
// carrying extra classes is not a container.
static USER_RULE: LazyLock<ExtractionRule> = LazyLock::new(|| ExtractionRule {
    container: selector(r#"div[class="d-inline-block mb-1"]"#),
    title: TitleRule::FirstAnchor,
    description: FieldRule::following("p"),
    stars: FieldRule::following("a.Link--muted"),
});

static TOPIC_RULE: LazyLock<ExtractionRule> = LazyLock::new(|| ExtractionRule {
    container: selector(
        r#"article[class="border rounded color-shadow-small color-bg-subtle my-4"]"#,
    ),
    title: TitleRule::OwnerAndName {
        heading: selector(r#"h3[class="f3 color-fg-muted text-normal lh-condensed"]"#),
    },
    description: FieldRule::within(r#"p[class="color-fg-muted my-1 pr-4"]"#),
    stars: FieldRule::within(r#"a[class="Link--muted d-inline-block mr-3"]"#),
});

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector should parse")
}

/// How one listing shape locates its containers and fields.
pub(crate) struct ExtractionRule {
    /// Selects every repeated repository entry on the page.
    pub(crate) container: Selector,
    /// Resolves the display name and relative link of an entry.
    pub(crate) title: TitleRule,
    pub(crate) description: FieldRule,
    pub(crate) stars: FieldRule,
}

impl ExtractionRule {
    /// Returns the rule for a listing shape.
    pub(crate) fn for_shape(shape: ListingShape) -> &'static ExtractionRule {
        match shape {
            ListingShape::UserRepositories => &USER_RULE,
            ListingShape::TopicRepositories => &TOPIC_RULE,
        }
    }
}

/// Where the name and link of an entry come from.
pub(crate) enum TitleRule {
    /// First anchor inside the container: its text is the name.
    FirstAnchor,
    /// A heading holding exactly two anchors, owner then repository.
    OwnerAndName { heading: Selector },
}

/// A resolved entry title.
pub(crate) struct Title {
    pub(crate) name: String,
    pub(crate) href: String,
}

impl TitleRule {
    /// Resolves the title, or `None` when the container lacks the required anchors.
    pub(crate) fn resolve(&self, container: ElementRef<'_>) -> Option<Title> {
        match self {
            Self::FirstAnchor => {
                let anchor = container.select(&ANCHOR).next()?;
                let href = anchor_href(anchor)?;
                let name = element_text(anchor);
                if name.is_empty() {
                    return None;
                }
                Some(Title { name, href })
            }
            Self::OwnerAndName { heading } => {
                let heading = container.select(heading).next()?;
                let anchors: Vec<ElementRef<'_>> = heading.select(&ANCHOR).collect();
                let [owner, repository] = anchors.as_slice() else {
                    return None;
                };

                let href = anchor_href(*repository)?;
                let owner = element_text(*owner);
                let repository = element_text(*repository);
                if owner.is_empty() || repository.is_empty() {
                    return None;
                }

                Some(Title {
                    name: format!("{owner}/{repository}"),
                    href,
                })
            }
        }
    }
}

/// Search scope for an optional field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldScope {
    /// Descendants of the container.
    Within,
    /// Elements after the container in document order, skipping its own subtree.
    Following,
}

/// Locates an optional field (description, stars) for a container.
pub(crate) struct FieldRule {
    selector: Selector,
    scope: FieldScope,
}

impl FieldRule {
    fn within(css: &str) -> Self {
        Self {
            selector: selector(css),
            scope: FieldScope::Within,
        }
    }

    fn following(css: &str) -> Self {
        Self {
            selector: selector(css),
            scope: FieldScope::Following,
        }
    }

    /// Returns the trimmed text of the first matching element, if any.
    pub(crate) fn text(&self, container: ElementRef<'_>) -> Option<String> {
        let found = match self.scope {
            FieldScope::Within => container.select(&self.selector).next(),
            FieldScope::Following => {
                following_elements(container).find(|element| self.selector.matches(element))
            }
        };
        found.map(element_text)
    }
}

/// Iterates the elements that follow `element` in document order.
///
/// Walks the following siblings of the element and of each ancestor, each
/// in pre-order, so descendants of `element` itself are never visited.
pub(crate) fn following_elements<'a>(
    element: ElementRef<'a>,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    std::iter::successors(Some(*element), |node| node.parent())
        .flat_map(|node| node.next_siblings())
        .flat_map(|sibling| sibling.descendants())
        .filter_map(ElementRef::wrap)
}

fn anchor_href(anchor: ElementRef<'_>) -> Option<String> {
    let href = anchor.value().attr("href")?.trim();
    (!href.is_empty()).then(|| href.to_string())
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn first<'a>(document: &'a Html, css: &str) -> ElementRef<'a> {
        document.select(&selector(css)).next().unwrap()
    }

    #[test]
    fn following_skips_own_descendants() {
        let document = Html::parse_document(
            r#"<div id="c"><p>inside</p></div><section><p>after</p></section>"#,
        );
        let container = first(&document, "#c");

        let rule = FieldRule::following("p");
        assert_eq!(rule.text(container).as_deref(), Some("after"));
    }

    #[test]
    fn following_climbs_to_ancestor_siblings() {
        let document = Html::parse_document(
            r#"<li><div><div id="c"><a href="/x">x</a></div></div></li><li><p>next</p></li>"#,
        );
        let container = first(&document, "#c");

        let rule = FieldRule::following("p");
        assert_eq!(rule.text(container).as_deref(), Some("next"));
    }

    #[test]
    fn within_does_not_leave_container() {
        let document =
            Html::parse_document(r#"<article id="c"></article><p class="d">outside</p>"#);
        let container = first(&document, "#c");

        assert_eq!(FieldRule::within("p.d").text(container), None);
    }

    #[test]
    fn first_anchor_requires_href_and_text() {
        let document = Html::parse_document(
            r#"<div id="a"><a>no link</a></div><div id="b"><a href="/u/r"> </a></div>"#,
        );

        assert!(TitleRule::FirstAnchor.resolve(first(&document, "#a")).is_none());
        assert!(TitleRule::FirstAnchor.resolve(first(&document, "#b")).is_none());
    }

    #[test]
    fn owner_and_name_requires_exactly_two_anchors() {
        let document = Html::parse_document(
            r#"
            <article id="one"><h3><a href="/octocat">octocat</a></h3></article>
            <article id="three">
              <h3><a href="/a">a</a><a href="/a/b">b</a><a href="/c">c</a></h3>
            </article>
            <article id="two">
              <h3>
                <a href="/octocat">octocat</a> / <a href="/octocat/Hello-World">Hello-World</a>
              </h3>
            </article>
            "#,
        );
        let rule = TitleRule::OwnerAndName {
            heading: selector("h3"),
        };

        assert!(rule.resolve(first(&document, "#one")).is_none());
        assert!(rule.resolve(first(&document, "#three")).is_none());

        let title = rule.resolve(first(&document, "#two")).unwrap();
        assert_eq!(title.name, "octocat/Hello-World");
        assert_eq!(title.href, "/octocat/Hello-World");
    }

    #[test]
    fn containers_match_whole_class_attribute() {
        let document = Html::parse_document(
            r#"<div class="d-inline-block mb-1"></div>
               <div class="d-inline-block mb-1 extra"></div>
               <div class="mb-1 d-inline-block"></div>"#,
        );
        let rule = ExtractionRule::for_shape(ListingShape::UserRepositories);

        assert_eq!(document.select(&rule.container).count(), 1);
    }

    #[test]
    fn topic_fields_match_whole_class_attribute() {
        let document = Html::parse_document(
            r#"<article id="c">
                 <p class="color-fg-muted my-1 pr-4 hidden">wrong</p>
                 <p class="color-fg-muted my-1 pr-4">right</p>
               </article>"#,
        );
        let rule = ExtractionRule::for_shape(ListingShape::TopicRepositories);

        let text = rule.description.text(first(&document, "#c"));
        assert_eq!(text.as_deref(), Some("right"));
    }
}

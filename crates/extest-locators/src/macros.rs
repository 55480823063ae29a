/// Build a [`LocatorSet`](crate::LocatorSet) from a table literal.
///
/// ```
/// use extest_locators::locator::{attr, id};
///
/// let set = extest_locators::locator_set! {
///     "StatusBar" => {
///         "language": id("status.editor.mode"),
///         "itemTitle": attr("aria-label"),
///     },
/// };
/// assert_eq!(set.len(), 2);
/// ```
#[macro_export]
macro_rules! locator_set {
    ($($component:literal => { $($field:literal : $value:expr),* $(,)? }),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut set = $crate::LocatorSet::new();
        $(
            #[allow(unused_variables)]
            let component = $component;
            $( set.insert(component, $field, $value); )*
        )*
        set
    }};
}

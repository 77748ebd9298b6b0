crate::macros::enum_builder! {
    /// The type of a datastar event, written in the `event` field of the SSE message.
    ///
    /// Ref: <https://data-star.dev/reference/sse_events>
    pub enum EventType {
        /// Merges one or more HTML fragments into the DOM.
        MergeFragments => "datastar-merge-fragments",
        /// Removes HTML fragments matching a CSS selector from the DOM.
        RemoveFragments => "datastar-remove-fragments",
        /// Merges signals into the client-side signal store.
        MergeSignals => "datastar-merge-signals",
        /// Removes signals from the client-side signal store.
        RemoveSignals => "datastar-remove-signals",
        /// Executes a script in the browser.
        ExecuteScript => "datastar-execute-script",
    }
}

crate::macros::enum_builder! {
    #[derive(Default)]
    /// The mode in which a fragment is merged into the DOM.
    pub enum FragmentMergeMode {
        #[default]
        /// Morph the fragment into the existing element using idiomorph.
        Morph => "morph",
        /// Replace the inner HTML of the target element.
        Inner => "inner",
        /// Replace the outer HTML of the target element.
        Outer => "outer",
        /// Prepend the fragment to the target's children.
        Prepend => "prepend",
        /// Append the fragment to the target's children.
        Append => "append",
        /// Insert the fragment before the target as a sibling.
        Before => "before",
        /// Insert the fragment after the target as a sibling.
        After => "after",
        /// Remove the target element from the DOM.
        Delete => "delete",
        /// Create or update the target's attributes only.
        UpsertAttributes => "upsert_attributes",
    }
}

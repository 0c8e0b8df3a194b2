use leptos::prelude::*;

use crate::section::{nav_items, PAGE_SECTIONS};

#[component]
pub fn NavBar(brand: &'static str) -> impl IntoView {
    let items = nav_items(&PAGE_SECTIONS);

    view! {
        <nav class="fixed top-0 left-0 w-full z-50 backdrop-blur-sm bg-black/70 shadow-md">
            <div class="max-w-6xl mx-auto px-6 py-4 flex justify-between items-center">
                <a href="#" class="text-xl font-bold tracking-widest text-red-500">
                    {brand}
                </a>
                <ul class="flex gap-6 text-sm">
                    {items
                        .into_iter()
                        .map(|(title, href)| {
                            view! {
                                <li>
                                    <a href=href class="hover:text-red-500 transition">
                                        {title}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </nav>
    }
}

/// Per-category average quality of the project, in display order.
const BUILTIN: &[(&str, f64)] = &[
    ("Планирование", 95.0),
    ("Анализ", 88.0),
    ("Проектирование", 92.0),
    ("Инфраструктура", 90.0),
    ("Разработка", 90.2),
    ("Интеграция", 85.0),
    ("Исправления", 88.0),
    ("Тестирование", 89.5),
    ("Документация", 92.0),
    ("Обучение", 94.0),
    ("Внедрение", 88.0),
];

pub fn builtin_pairs() -> &'static [(&'static str, f64)] {
    BUILTIN
}

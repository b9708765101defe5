//! End-to-end ingestion: sheet text in, display items out.

use pretty_assertions::assert_eq;
use taproom_board::config::Config;
use taproom_board::models::{BeerCategory, ItemId, LifecycleState};
use taproom_board::MenuPipeline;

#[test]
fn semicolon_sheet_with_discount_row() {
    let text = "id;название;цена;Наличие;Тип\n1;Пилснер;100;скидка 20%;светлое\n";
    let items = MenuPipeline::default().ingest(text);

    assert_eq!(items.len(), 1);
    let item = &items[0];
    assert_eq!(item.id, ItemId::new(1.0));
    assert_eq!(item.title, "Пилснер");
    assert_eq!(item.price, "80₽");
    assert_eq!(item.state, LifecycleState::OnSale);
    assert_eq!(item.discount_percent, 20);
    assert_eq!(item.badge.as_ref().map(|b| b.category), Some(BeerCategory::Light));
}

#[test]
fn historical_comma_schema_resolves_the_same_fields() {
    let text = concat!(
        "\"id\",\"Наименование\",\"Страна\",\"Плотность°P\",\"Цена₽\",\"instock\",\"beertype\",\"акцент\"\r\n",
        "\"2\",\"2. Ратминское\",\"Россия\",\"4.5% / 11°P\",\"250₽\",\"yes\",\"beertype=dark\",\"новинка\"\r\n",
        "\"1\",\"1. Жигули \"\"Барное\"\"\",\"Россия\",\"4% / 10°P\",\"180\",\"no\",\"beertype=n/a\",\"-\"\r\n",
    );
    let items = MenuPipeline::default().ingest(text);

    assert_eq!(items.len(), 2);

    assert_eq!(items[0].title, "2. Ратминское");
    assert_eq!(items[0].price, "250₽");
    assert_eq!(items[0].state, LifecycleState::InStock);
    assert_eq!(items[0].badge.as_ref().map(|b| b.asset.as_str()), Some("beertype=dark.png"));
    assert_eq!(items[0].accent.as_ref().map(|a| a.asset.as_str()), Some("new.png"));

    assert_eq!(items[1].title, "1. Жигули \"Барное\"");
    assert_eq!(items[1].state, LifecycleState::Pending);
    assert_eq!(items[1].price, "Ожидается");
    assert_eq!(items[1].badge.as_ref().map(|b| b.asset.as_str()), Some("nonalc.png"));
    assert_eq!(items[1].accent, None);
}

#[test]
fn precomputed_sale_price_beats_coefficient() {
    let text = "id;название;цена;Цена со скидкой;коэффициент;Наличие\n5;IPA;400;299;0,5;скидка 10%\n";
    let items = MenuPipeline::default().ingest(text);
    assert_eq!(items[0].price, "299₽");
}

#[test]
fn malformed_rows_never_block_siblings() {
    let text = concat!(
        "id;название;цена;Наличие;Тип\n",
        ";;;;\n",
        "x;Без номера;abc;???;неизвестно\n",
        "3;Короткая\n",
        "4;Стаут;300;да;темное\n",
    );
    let items = MenuPipeline::default().ingest(text);

    assert_eq!(items.len(), 3);

    assert_eq!(items[0].id, None);
    assert_eq!(items[0].price, "");
    assert_eq!(items[0].state, LifecycleState::InStock);
    assert_eq!(items[0].badge, None);

    assert_eq!(items[1].title, "Короткая");
    assert_eq!(items[1].price, "");

    assert_eq!(items[2].price, "300₽");
    assert_eq!(items[2].badge.as_ref().map(|b| b.category), Some(BeerCategory::Dark));
}

#[test]
fn empty_sheet_builds_a_board_with_only_the_filler() {
    let board = MenuPipeline::default().build_board("");
    assert_eq!(board.item_count(), 0);
    assert_eq!(board.cards().len(), 1);
    assert!(board.cards()[0].is_filler());
}

#[test]
fn configured_synonyms_and_glyph_flow_through() {
    let config = Config::from_toml_str(
        r#"
        [board]
        currency_glyph = " руб."
        filler_position = 1

        [fields]
        price = ["стоимость"]
        "#,
    )
    .unwrap();
    let pipeline = MenuPipeline::new(&config);

    let board = pipeline.build_board("id,название,стоимость,цена\n1,Лагер,150,999\n");
    assert!(board.cards()[0].is_filler());
    assert_eq!(board.cards()[1].as_item().unwrap().price, "150 руб.");
}

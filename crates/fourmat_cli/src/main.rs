//! Demonstration driver: renders a small inventory through a fourmat
//! handle in whichever style and flags the command line selects.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use fourmat::{emit, Flags, Handle, Info, Style};

#[derive(Parser)]
#[command(name = "fourmat")]
#[command(about = "Render a sample inventory in any of the four output styles")]
struct Cli {
    /// Output style.
    #[arg(value_enum, default_value = "text")]
    style: StyleArg,

    /// Insert newlines and indentation.
    #[arg(long)]
    pretty: bool,

    /// Annotate HTML fields with data-xpath attributes.
    #[arg(long)]
    xpath: bool,

    /// Annotate HTML fields with data-type and data-help attributes.
    #[arg(long)]
    info: bool,

    /// Report hierarchy and format-string misuse on standard error.
    #[arg(long)]
    warn: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum StyleArg {
    Text,
    Xml,
    Json,
    Html,
}

impl From<StyleArg> for Style {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Text => Style::Text,
            StyleArg::Xml => Style::Xml,
            StyleArg::Json => Style::Json,
            StyleArg::Html => Style::Html,
        }
    }
}

struct Item {
    title: &'static str,
    sold: u32,
    in_stock: u32,
    on_order: u32,
    sku_base: &'static str,
    sku_num: u32,
}

const ITEMS: &[Item] = &[
    Item { title: "gum", sold: 1412, in_stock: 54, on_order: 10, sku_base: "GRO", sku_num: 415 },
    Item { title: "rope", sold: 85, in_stock: 4, on_order: 2, sku_base: "HRD", sku_num: 212 },
    Item { title: "ladder", sold: 0, in_stock: 2, on_order: 1, sku_base: "HRD", sku_num: 517 },
    Item { title: "bolt", sold: 4123, in_stock: 144, on_order: 42, sku_base: "HRD", sku_num: 632 },
    Item { title: "water", sold: 17, in_stock: 14, on_order: 2, sku_base: "GRO", sku_num: 2331 },
];

const RESTOCK: &[Item] = &[Item {
    title: "fish",
    sold: 1321,
    in_stock: 45,
    on_order: 1,
    sku_base: "GRO",
    sku_num: 533,
}];

fn info_table() -> Vec<Info> {
    vec![
        Info::new("in-stock", "number", "Number of items in stock"),
        Info::new("name", "string", "Name of the item"),
        Info::new("on-order", "number", "Number of items on order"),
        Info::new("sku", "string", "Stock Keeping Unit"),
        Info::new("sold", "number", "Number of items sold"),
    ]
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut flags = Flags::NONE;
    if cli.pretty {
        flags |= Flags::PRETTY;
    }
    if cli.xpath {
        flags |= Flags::XPATH;
    }
    if cli.info {
        flags |= Flags::INFO;
    }
    if cli.warn {
        flags |= Flags::WARN;
    }

    let mut h = Handle::new(cli.style.into(), flags);
    h.set_info(info_table());

    h.open_container("top")?;
    h.open_container("data")?;
    h.open_list("item")?;

    emit!(
        h,
        "{T:Item/%-10s}{T:Total Sold/%12s}{T:In Stock/%12s}{T:On Order/%12s}{T:SKU/%5s}\n"
    )?;

    for item in ITEMS {
        h.open_instance("item")?;
        emit!(
            h,
            "{:item/%-10s/%s}{:sold/%12u/%u}{:in-stock/%12u/%u}\
             {:on-order/%12u/%u}{:sku/%5s-000-%u/%s-000-%u}\n",
            item.title,
            item.sold,
            item.in_stock,
            item.on_order,
            item.sku_base,
            item.sku_num,
        )?;
        h.close_instance("item")?;
    }

    h.close_list("item")?;
    h.close_container("data")?;

    emit!(h, "\n\n")?;

    h.open_container("data")?;
    h.open_list("item")?;

    for item in RESTOCK {
        h.open_instance("item")?;
        emit!(h, "{L:Item} '{:name/%s}':\n", item.title)?;
        emit!(
            h,
            "{P:   }{L:Total sold}: {N:sold/%u%s}\n",
            item.sold,
            if item.sold > 0 { ".0" } else { "" },
        )?;
        emit!(h, "{P:   }{LWC:In stock}{:in-stock/%u}\n", item.in_stock)?;
        emit!(h, "{P:   }{LWC:On order}{:on-order/%u}\n", item.on_order)?;
        emit!(h, "{P:   }{L:SKU}: {Q:sku/%s-000-%u}\n", item.sku_base, item.sku_num)?;
        h.close_instance("item")?;
    }

    h.close_list("item")?;
    h.close_container("data")?;
    h.close_container("top")?;

    Ok(())
}

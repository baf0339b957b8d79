#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const ORDERS: &str = "\
order_id,customer_id,order_status,order_purchase_timestamp,order_approved_at,order_delivered_carrier_date,order_delivered_customer_date,order_estimated_delivery_date
o1,c1,delivered,2017-01-01 10:00:00,2017-01-01 10:15:00,2017-01-02 08:00:00,2017-01-05 10:00:00,2017-01-20 00:00:00
o2,c2,delivered,2017-01-20 09:00:00,2017-01-20 09:30:00,2017-01-21 12:00:00,2017-02-01 18:00:00,2017-02-10 00:00:00
o3,c3,shipped,2017-02-03 14:00:00,2017-02-03 14:10:00,2017-02-04 09:00:00,,2017-02-25 00:00:00
o4,c4,canceled,2017-02-10 08:00:00,,,,2017-03-01 00:00:00
o5,c5,shipped,2017-03-15 11:00:00,2017-03-15 11:05:00,,,2017-04-02 00:00:00
";

pub const ORDER_ITEMS: &str = "\
order_id,order_item_id,product_id,seller_id,shipping_limit_date,price,freight_value
o1,1,p1,s1,2017-01-03 10:00:00,100.00,10.00
o1,2,p2,s2,2017-01-03 10:00:00,40.00,8.50
o2,1,p1,s1,2017-01-22 09:00:00,60.00,12.00
o3,1,p3,s3,2017-02-05 14:00:00,25.00,5.00
o5,1,p4,s2,2017-03-17 11:00:00,15.00,4.00
";

pub const PRODUCTS: &str = "\
product_id,product_category_name,product_name_lenght,product_weight_g
p1,brinquedos,40,500
p2,livros_interesse_geral,35,300
p3,,20,100
p4,categoria_nova,22,250
";

pub const TRANSLATION: &str = "\
product_category_name,product_category_name_english
brinquedos,toys
livros_interesse_geral,books_general_interest
";

pub const SELLERS: &str = "\
seller_id,seller_zip_code_prefix,seller_city,seller_state
s1,13023,campinas,SP
s2,01037,sao paulo,SP
s3,99999,sao paulo,SP
";

pub const GEOLOCATION: &str = "\
geolocation_zip_code_prefix,geolocation_lat,geolocation_lng,geolocation_city,geolocation_state
1037,-23.545,-46.639,sao paulo,SP
13023,-22.898,-47.063,campinas,SP
1037,-23.546,-46.640,sao paulo,SP
";

pub const PAYMENTS: &str = "\
order_id,payment_sequential,payment_type,payment_installments,payment_value
o1,1,credit_card,2,148.50
o1,2,voucher,1,10.00
o2,1,boleto,1,72.00
o3,1,credit_card,1,30.00
o9,1,debit_card,1,500.00
";

pub const CUSTOMERS: &str = "\
customer_id,customer_unique_id,customer_zip_code_prefix,customer_city,customer_state
c1,u1,14409,franca,SP
c2,u2,9790,sao bernardo do campo,SP
c3,u3,1151,sao paulo,SP
c4,u4,8775,mogi das cruzes,SP
c5,u5,13056,campinas,SP
";

pub fn write_datasets(dir: &Path) {
    let files = [
        ("orders_dataset.csv", ORDERS),
        ("order_items_dataset.csv", ORDER_ITEMS),
        ("products_dataset.csv", PRODUCTS),
        ("product_category_name_translation.csv", TRANSLATION),
        ("sellers_dataset.csv", SELLERS),
        ("geolocation_dataset.csv", GEOLOCATION),
        ("order_payments_dataset.csv", PAYMENTS),
        ("customers_dataset.csv", CUSTOMERS),
    ];
    for (name, contents) in files {
        fs::write(dir.join(name), contents).unwrap();
    }
}

pub fn dataset_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_datasets(dir.path());
    dir
}

//! Rendering of every jQuery instance method and of selector arguments

use jqgen::selector::{self, Selector};
use jqgen::{HasJsCode, HtmlElement, JQueryAlias, SelectorList, WriterSettings, id_ref, jquery_document};

fn settings() -> WriterSettings {
    WriterSettings::default()
}

macro_rules! assert_invocations {
    ($($method:ident => $expected:literal),* $(,)?) => {
        $(
            assert_eq!(
                jquery_document().$method().arg(5).to_js_code(&settings()),
                $expected,
                "method {}",
                stringify!($method)
            );
        )*
    };
}

#[test]
fn test_invoke_all() {
    assert_invocations! {
        add => "$(document).add(5);",
        add_back => "$(document).addBack(5);",
        add_class => "$(document).addClass(5);",
        after => "$(document).after(5);",
        ajax_complete => "$(document).ajaxComplete(5);",
        ajax_error => "$(document).ajaxError(5);",
        ajax_send => "$(document).ajaxSend(5);",
        ajax_start => "$(document).ajaxStart(5);",
        ajax_stop => "$(document).ajaxStop(5);",
        ajax_success => "$(document).ajaxSuccess(5);",
        and_self => "$(document).andSelf(5);",
        animate => "$(document).animate(5);",
        append => "$(document).append(5);",
        append_to => "$(document).appendTo(5);",
        attr => "$(document).attr(5);",
        before => "$(document).before(5);",
        bind => "$(document).bind(5);",
        blur => "$(document).blur(5);",
        change => "$(document).change(5);",
        children => "$(document).children(5);",
        clear_queue => "$(document).clearQueue(5);",
        click => "$(document).click(5);",
        clone_ => "$(document).clone(5);",
        closest => "$(document).closest(5);",
        contents => "$(document).contents(5);",
        contextmenu => "$(document).contextmenu(5);",
        css => "$(document).css(5);",
        data => "$(document).data(5);",
        dblclick => "$(document).dblclick(5);",
        delay => "$(document).delay(5);",
        delegate => "$(document).delegate(5);",
        dequeue => "$(document).dequeue(5);",
        detach => "$(document).detach(5);",
        die => "$(document).die(5);",
        each => "$(document).each(5);",
        empty => "$(document).empty(5);",
        end => "$(document).end(5);",
        eq_ => "$(document).eq(5);",
        error => "$(document).error(5);",
        fade_in => "$(document).fadeIn(5);",
        fade_out => "$(document).fadeOut(5);",
        fade_to => "$(document).fadeTo(5);",
        fade_toggle => "$(document).fadeToggle(5);",
        filter => "$(document).filter(5);",
        find => "$(document).find(5);",
        finish => "$(document).finish(5);",
        first => "$(document).first(5);",
        focus => "$(document).focus(5);",
        focusin => "$(document).focusin(5);",
        focusout => "$(document).focusout(5);",
        get => "$(document).get(5);",
        has => "$(document).has(5);",
        has_class => "$(document).hasClass(5);",
        height => "$(document).height(5);",
        hide => "$(document).hide(5);",
        hover => "$(document).hover(5);",
        html => "$(document).html(5);",
        index => "$(document).index(5);",
        inner_height => "$(document).innerHeight(5);",
        inner_width => "$(document).innerWidth(5);",
        insert_after => "$(document).insertAfter(5);",
        insert_before => "$(document).insertBefore(5);",
        is => "$(document).is(5);",
        keydown => "$(document).keydown(5);",
        keypress => "$(document).keypress(5);",
        keyup => "$(document).keyup(5);",
        last => "$(document).last(5);",
        live => "$(document).live(5);",
        load => "$(document).load(5);",
        map => "$(document).map(5);",
        mousedown => "$(document).mousedown(5);",
        mouseenter => "$(document).mouseenter(5);",
        mouseleave => "$(document).mouseleave(5);",
        mousemove => "$(document).mousemove(5);",
        mouseout => "$(document).mouseout(5);",
        mouseover => "$(document).mouseover(5);",
        mouseup => "$(document).mouseup(5);",
        next => "$(document).next(5);",
        next_all => "$(document).nextAll(5);",
        next_until => "$(document).nextUntil(5);",
        not_ => "$(document).not(5);",
        off => "$(document).off(5);",
        offset => "$(document).offset(5);",
        offset_parent => "$(document).offsetParent(5);",
        on => "$(document).on(5);",
        one => "$(document).one(5);",
        outer_height => "$(document).outerHeight(5);",
        outer_width => "$(document).outerWidth(5);",
        parent => "$(document).parent(5);",
        parents => "$(document).parents(5);",
        parents_until => "$(document).parentsUntil(5);",
        position => "$(document).position(5);",
        prepend => "$(document).prepend(5);",
        prepend_to => "$(document).prependTo(5);",
        prev => "$(document).prev(5);",
        prev_all => "$(document).prevAll(5);",
        prev_until => "$(document).prevUntil(5);",
        promise => "$(document).promise(5);",
        prop => "$(document).prop(5);",
        push_stack => "$(document).pushStack(5);",
        queue => "$(document).queue(5);",
        ready => "$(document).ready(5);",
        remove => "$(document).remove(5);",
        remove_attr => "$(document).removeAttr(5);",
        remove_class => "$(document).removeClass(5);",
        remove_data => "$(document).removeData(5);",
        remove_prop => "$(document).removeProp(5);",
        replace_all => "$(document).replaceAll(5);",
        replace_with => "$(document).replaceWith(5);",
        resize => "$(document).resize(5);",
        scroll => "$(document).scroll(5);",
        scroll_left => "$(document).scrollLeft(5);",
        scroll_top => "$(document).scrollTop(5);",
        select => "$(document).select(5);",
        serialize => "$(document).serialize(5);",
        serialize_array => "$(document).serializeArray(5);",
        show => "$(document).show(5);",
        siblings => "$(document).siblings(5);",
        size => "$(document).size(5);",
        slice => "$(document).slice(5);",
        slide_down => "$(document).slideDown(5);",
        slide_toggle => "$(document).slideToggle(5);",
        slide_up => "$(document).slideUp(5);",
        stop => "$(document).stop(5);",
        submit => "$(document).submit(5);",
        text => "$(document).text(5);",
        to_array => "$(document).toArray(5);",
        toggle => "$(document).toggle(5);",
        toggle_class => "$(document).toggleClass(5);",
        trigger => "$(document).trigger(5);",
        trigger_handler => "$(document).triggerHandler(5);",
        unbind => "$(document).unbind(5);",
        undelegate => "$(document).undelegate(5);",
        unload => "$(document).unload(5);",
        unwrap => "$(document).unwrap(5);",
        val => "$(document).val(5);",
        width => "$(document).width(5);",
        wrap => "$(document).wrap(5);",
        wrap_all => "$(document).wrapAll(5);",
        wrap_inner => "$(document).wrapInner(5);",
        enable => "$(document).enable(5);",
        disable => "$(document).disable(5);",
        check => "$(document).check(5);",
        uncheck => "$(document).uncheck(5);",
    }
}

#[test]
fn test_namespaced_methods() {
    let s = settings();
    assert_eq!(jquery_document().callbacks_fire().to_js_code(&s), "$(document).fire();");
    assert_eq!(jquery_document().deferred_resolve_with().to_js_code(&s), "$(document).resolveWith();");
    assert_eq!(
        jquery_document().event_stop_propagation().to_js_code(&s),
        "$(document).stopPropagation();"
    );
}

#[test]
#[allow(deprecated)]
fn test_fields() {
    let s = settings();
    assert_eq!(jquery_document().jquery().to_js_code(&s), "$(document).jquery");
    assert_eq!(jquery_document().length().to_js_code(&s), "$(document).length");
    assert_eq!(jquery_document().context().to_js_code(&s), "$(document).context");
}

#[test]
fn test_args() {
    let s = settings();
    assert_eq!(
        jquery_document().on().arg(id_ref("abc").unwrap()).to_js_code(&s),
        "$(document).on($('#abc'));"
    );
    assert_eq!(
        jquery_document().on().arg(selector::id("abc").unwrap()).to_js_code(&s),
        "$(document).on('#abc');"
    );

    let list: SelectorList = [
        selector::id("abc").unwrap(),
        selector::element_of(HtmlElement::Td),
    ]
    .into_iter()
    .collect();
    assert_eq!(
        jquery_document().on().try_arg(&list).unwrap().to_js_code(&s),
        "$(document).on('#abc td');"
    );
    assert_eq!(
        jquery_document()
            .on()
            .arg(selector::id("abc").unwrap().descendant(selector::element_of(HtmlElement::Td)))
            .to_js_code(&s),
        "$(document).on('#abc td');"
    );
    assert!(jquery_document().on().try_arg(&SelectorList::new()).is_err());
}

#[test]
fn test_chained_calls() {
    let inv = jquery_document()
        .find()
        .arg(Selector::new("tr").odd())
        .add_class()
        .arg("striped")
        .end();
    assert_eq!(
        inv.to_js_code(&settings()),
        "$(document).find('tr:odd').addClass('striped').end();"
    );
}

#[test]
fn test_jquery_alias() {
    let s = JQueryAlias::JQuery.apply(settings());
    assert_eq!(
        jquery_document().add().arg(5).to_js_code(&s),
        "jQuery(document).add(5);"
    );
    assert_eq!(
        jquery_document().jquery().to_js_code(&s),
        "jQuery(document).jquery"
    );
}
